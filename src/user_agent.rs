//! Synthetic client identity.
//!
//! Each request presents itself as a text-mode browser with randomized
//! library versions. Text browsers get the lightweight result page, whose
//! markup the extractor understands.

use rand::Rng;

/// Generates a fresh user agent such as
/// `Lynx/2.8.1 libwww-FM/2.14 SSL-MM/1.4 OpenSSL/1.3.7`.
pub fn random_user_agent() -> String {
    let mut rng = rand::thread_rng();

    let lynx = format!(
        "Lynx/{}.{}.{}",
        rng.gen_range(2..=3),
        rng.gen_range(8..=9),
        rng.gen_range(0..=2)
    );
    let libwww = format!(
        "libwww-FM/{}.{}",
        rng.gen_range(2..=3),
        rng.gen_range(13..=15)
    );
    let ssl_mm = format!("SSL-MM/1.{}", rng.gen_range(3..=5));
    let openssl = format!(
        "OpenSSL/{}.{}.{}",
        rng.gen_range(1..=3),
        rng.gen_range(0..=4),
        rng.gen_range(0..=9)
    );

    format!("{} {} {} {}", lynx, libwww, ssl_mm, openssl)
}
