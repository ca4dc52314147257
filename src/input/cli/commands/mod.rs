pub mod run_headless;
