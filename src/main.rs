use ganrun::context::Environment;
use ganrun::core;
use ganrun::status::ExitStatus;

/// Entry point - collects arguments and calls core::run()
///
/// Returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    let args: Vec<String> = std::env::args().collect();
    let env = Environment::init();

    core::run(args, env)
}
