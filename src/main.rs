//! docsmith's main application entry point.

use docsmith::{
    cli::{get_args, Args},
    config::Settings,
    error::{default_error_handler, DocResult},
    logger::init_logger,
    processor::Processor,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> DocResult<()> {
    let engine = MiniJinjaRenderer::new();
    let settings = Settings::from(args);
    let processor = Processor::new(&settings, &engine)?;
    processor.run()
}
