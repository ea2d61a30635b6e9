use status_fetch::Profile;

// Prints a preview of the payload and re-checks its size once written.
fn main() {
    std::process::exit(status_fetch::launch(Profile::Inspect));
}
