/// Binary entrypoint for the `binseq` executable.
///
/// Keeps the binary thin; all business logic lives in the `binseq_lib` crate
/// so unit tests can import library functions directly.
fn main() {
    binseq_lib::run();
}
