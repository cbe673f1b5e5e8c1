fn main() {
    api_mock_runner::app::cli::run();
}
