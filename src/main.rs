mod config;
mod fs_ops;
mod installer;
mod logging;
mod paths;

fn main() {
    if installer::run().is_err() {
        std::process::exit(1);
    }
}
