/*
 * Star Field
 *
 * Renders a field of drifting stars that shy away from the pointer, enter
 * from the window edges when the field grows, and are joined by lines when
 * they come close to each other.
 *
 * Run with RUST_LOG=debug for population and frame budget details.
 */

use starfield::app;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    nannou::app(app::model)
        .update(app::update)
        .exit(app::exit)
        .run();
}
