/// The commentary endpoint is an XHR made by the mobile site; it is requested with the same agent.
pub const MOBILE_CHROME: &str = "Mozilla/5.0 (Linux; Android 6.0; Nexus 5 Build/MRA58N) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/134.0.0.0 Mobile Safari/537.36";

const DESKTOP_OS: [&str; 6] = [
    "Windows NT 10.0; Win64; x64",
    "Windows NT 11.0; Win64; x64",
    "Macintosh; Intel Mac OS X 10_15_7",
    "Macintosh; Intel Mac OS X 14_2_1",
    "X11; Linux x86_64",
    "X11; Ubuntu; Linux x86_64",
];

const CHROME_VERSIONS: [&str; 10] = [
    "134.0.6998.88", "134.0.6998.35", "133.0.6943.141", "133.0.6943.98", "132.0.6834.159",
    "132.0.6834.110", "131.0.6778.204", "131.0.6778.108", "130.0.6723.117", "130.0.6723.92",
];

const FIREFOX_VERSIONS: [&str; 8] = [
    "136.0", "135.0", "134.0", "133.0", "132.0", "131.0", "130.0", "128.0",
];

const EDGE_VERSIONS: [&str; 6] = [
    "134.0.3124.66", "134.0.3124.51", "133.0.3065.92", "133.0.3065.69", "132.0.2957.140",
    "131.0.2903.112",
];

fn pick<'a>(items: &[&'a str]) -> &'a str {
    items[rand::random_range(0..items.len())]
}

fn gen_chrome_ua() -> String {
    format!(
        "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{} Safari/537.36",
        pick(&DESKTOP_OS),
        pick(&CHROME_VERSIONS)
    )
}

fn gen_firefox_ua() -> String {
    let version = pick(&FIREFOX_VERSIONS);
    format!(
        "Mozilla/5.0 ({}; rv:{}) Gecko/20100101 Firefox/{}",
        pick(&DESKTOP_OS),
        version,
        version
    )
}

fn gen_edge_ua() -> String {
    let version = pick(&EDGE_VERSIONS);
    let chrome_major = version.split('.').next().unwrap_or("134");
    format!(
        "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{}.0.0.0 Safari/537.36 Edg/{}",
        pick(&DESKTOP_OS),
        chrome_major,
        version
    )
}

/// A desktop browser user agent, weighted roughly by market share.
pub fn gen_random_ua() -> String {
    match rand::random_range(0..10) {
        0..=5 => gen_chrome_ua(),
        6..=7 => gen_firefox_ua(),
        _ => gen_edge_ua(),
    }
}
