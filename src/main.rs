fn main() {
    vowelkit::app::cli::run();
}
