use mars_rover::cli;

fn main() {
    cli::run();
}
