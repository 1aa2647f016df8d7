//! Trunk entry point.

fn main() {
    #[cfg(feature = "csr")]
    portfolio::start();

    #[cfg(not(feature = "csr"))]
    eprintln!("portfolio renders in the browser; build with `trunk serve --features csr`");
}
