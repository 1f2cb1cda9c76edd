#[test]
fn integration_generate_and_analyze() {
    // Generate a sequence and verify sanity plus that the quality battery
    // accepts it as input
    let seq = binseq_lib::generate::generate(256).expect("generate");
    assert_eq!(seq.len(), 256);
    assert!(seq.chars().all(|c| c == '0' || c == '1'));
    let report = binseq_lib::analyze::TestReport::for_bits(&seq).expect("analyze");
    assert!((0.0..=1.0).contains(&report.frequency));
    assert!((0.0..=1.0).contains(&report.runs));
    assert!((0.0..=1.0).contains(&report.longest_run));
}
