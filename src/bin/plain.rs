use status_fetch::Profile;

fn main() {
    std::process::exit(status_fetch::launch(Profile::Plain));
}
