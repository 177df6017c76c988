//! Tests for URL sanitization through the public API.

use proptest::prelude::*;
use socialurl::rules::{secure_domains, LANGUAGE_PARAMS, TRACKING_PARAMS};
use socialurl::{sanitize_url, sanitize_url_with, SanitizeOptions, UrlError};
use url::Url;

#[test]
fn test_invalid_args() {
    assert_eq!(sanitize_url("invalid-url"), Err(UrlError::InvalidUrl));
    assert_eq!(sanitize_url(""), Err(UrlError::InvalidUrl));

    let disallowed = vec!["ftp://ftp.host", "site://site.com", "javascript:alert('xss')"];
    for url in disallowed {
        assert!(
            matches!(sanitize_url(url), Err(UrlError::DisallowedProtocol(_))),
            "Should reject protocol: {}",
            url
        );
    }

    assert_eq!(
        sanitize_url("http://domain.invalidtld"),
        Err(UrlError::InvalidDomain("domain.invalidtld".to_string()))
    );
    assert!(sanitize_url("http://_-_.com").is_err());
}

#[test]
fn test_allow_ftp_protocol() {
    let opts = SanitizeOptions::new().with_protocols(["http:", "https:", "ftp:"]);
    assert_eq!(sanitize_url_with("ftp://ftp.host", &opts).unwrap(), "ftp://ftp.host/");
}

#[test]
fn test_plain_sites() {
    assert_eq!(sanitize_url("https://example.com").unwrap(), "https://example.com/");
    assert_eq!(sanitize_url("http://example.com").unwrap(), "https://example.com/");
    assert_eq!(sanitize_url("http://example.org").unwrap(), "http://example.org/");
}

#[test]
fn test_missing_protocol() {
    assert_eq!(sanitize_url("google.com").unwrap(), "https://google.com/");
    assert_eq!(sanitize_url("www.example.com").unwrap(), "https://www.example.com/");
    assert_eq!(sanitize_url("example.org/about").unwrap(), "http://example.org/about");
}

#[test]
fn test_protocol_upgrade() {
    assert_eq!(sanitize_url("http://facebook.com").unwrap(), "https://www.facebook.com/");
    assert_eq!(sanitize_url("http://google.com").unwrap(), "https://google.com/");
    assert_eq!(sanitize_url("http://mobile.twitter.com/rustlang").unwrap(), "https://twitter.com/rustlang");
}

#[test]
fn test_secure_domains_upgrade() {
    for host in secure_domains() {
        let sanitized = sanitize_url(format!("http://{}", host)).unwrap();
        let url = Url::parse(&sanitized).unwrap();
        assert_eq!(url.scheme(), "https", "{} was not upgraded", host);
    }
}

#[test]
fn test_remove_tracking_params() {
    let test_cases = vec![
        ("https://www.facebook.com/oculus/?ref=bookmarks", "https://www.facebook.com/oculus/"),
        (
            "https://www.sorryapp.com/powered-by?utm_medium=statusfooter&utm_source=ea5d5bbc.sorryapp.com",
            "https://www.sorryapp.com/powered-by",
        ),
        (
            "https://www.going.com/blog/introducing-going?_ga=2.69242896.1293422072.1673460812-1097120473.1673460812",
            "https://www.going.com/blog/introducing-going",
        ),
        (
            "https://www.snapchat.com/add/nyc?share_id=QzVCQkJDNUUtQzgzNS00NjRCLTlEQzQtNTRDRTNDMTE2QzFD&locale=en_US&sid=7eb444d1a6b94949b5a2215b1ef0d459&utm_medium=social&utm_source=hoobe",
            "https://www.snapchat.com/add/nyc",
        ),
        (
            "https://open.spotify.com/user/31nc3nalswo2n4zo2x4hcra4w2oe?si=sOPwLS9ITfG135t-NJYuxg&nd=1",
            "https://open.spotify.com/user/31nc3nalswo2n4zo2x4hcra4w2oe",
        ),
        ("https://youtu.be/nTeia0mgz5Y?si=Og7QukHZYo0LBTmm", "https://youtu.be/nTeia0mgz5Y"),
        (
            "https://www.proquest.com/?cbl=60394&pq-origsite=gscholar",
            "https://www.proquest.com/?cbl=60394",
        ),
        (
            "https://trailrunningacademy.com/?fbclid=PAAabHWuo5mUnQXPoQ2CdbUdN_S8nJGA11yv8sdxRb5HfSphG_QYAv1f76MSQ",
            "https://trailrunningacademy.com/",
        ),
    ];

    for (input, expected) in test_cases {
        assert_eq!(sanitize_url(input).unwrap(), expected, "Sanitization failed for: {}", input);
    }
}

#[test]
fn test_remove_language_params() {
    assert_eq!(
        sanitize_url("https://www.instagram.com/twitter/?hl=en").unwrap(),
        "https://www.instagram.com/twitter/"
    );
}

#[test]
fn test_remove_meta_params() {
    assert_eq!(
        sanitize_url("https://instagram.com/instagram?igshid=YmMyMTA2M2Y=").unwrap(),
        "https://www.instagram.com/instagram"
    );
}

#[test]
fn test_remove_twitter_params() {
    assert_eq!(
        sanitize_url("https://twitter.com/Twitter/status/1601692766257709056?s=20&t=lBdttyHtwzrA27bJqu0g0Q").unwrap(),
        "https://twitter.com/Twitter/status/1601692766257709056"
    );
    assert_eq!(
        sanitize_url("https://twitter.com/Twitter/status/1601692766257709056?ref_src=twsrc%5Etfw%7Ctwcamp%5Etweetembed%7Ctwterm%5E1598901113910333440%7Ctwgr%5E61781d6803d9d3ca6533629ca455faeab6f45cd2%7Ctwcon%5Es1_&ref_url=https%3A%2F%2Fdomaininvesting.com%2Fpage%2F2%2F").unwrap(),
        "https://twitter.com/Twitter/status/1601692766257709056"
    );
    assert_eq!(
        sanitize_url("https://twitter.com/twitter?s=11&t=2tlSCDpZdGnnGGLxfKXDZA").unwrap(),
        "https://twitter.com/twitter"
    );
}

#[test]
fn test_remove_tiktok_params() {
    assert_eq!(
        sanitize_url("https://www.tiktok.com/@tiktok?_t=8WEXSJjCgJp&_r=1").unwrap(),
        "https://www.tiktok.com/@tiktok"
    );
    assert_eq!(
        sanitize_url("https://www.tiktok.com/@cheese?_t=8ZjpTKn57iP&_r=1").unwrap(),
        "https://www.tiktok.com/@cheese"
    );
    assert_eq!(
        sanitize_url("https://www.tiktok.com/@tiktok?_d=secCgwIARCbDRjEFSADKAESPgo8dEq2Wni2E6WvJCanRSEzDDF0Qb3RpJoNdteKw%2FyQFEAOVm9Yeguo6SYmk56ER3KJdz%2FcPjxv3OhCauTjGgA%3D&checksum=6247ea4bffa090bbeafdcd95a1ee71f98b3dec4aa4480a8e4cad6b3479e8048b&language=he&sec_uid=MS4wLjABAAAAMVSsV5si5Q3TE-hoefIkSB4SfGiP7efmbW_sleWrFoQ4aNpdKNTVun1VeiEJvXWz&sec_user_id=MS4wLjABAAAAMVSsV5si5Q3TE-hoefIkSB4SfGiP7efmbW_sleWrFoQ4aNpdKNTVun1VeiEJvXWz&share_app_id=1233&share_author_id=6756995973303993349&share_link_id=BFA12B73-0A6C-4CAC-9A99-B7B5E513FAFF&tt_from=copy&u_code=d97f07a06fdd47&user_id=6756995973303993349&utm_campaign=client_share&utm_medium=ios&utm_source=copy&_r=1").unwrap(),
        "https://www.tiktok.com/@tiktok"
    );
}

#[test]
fn test_parsed_url_input() {
    let parsed = Url::parse("http://facebook.com/zuck?fbclid=abc#about").unwrap();
    assert_eq!(sanitize_url(&parsed).unwrap(), "https://www.facebook.com/zuck");
    // The caller's value is not modified
    assert_eq!(parsed.as_str(), "http://facebook.com/zuck?fbclid=abc#about");
}

#[test]
fn test_options_from_config() {
    let opts: SanitizeOptions =
        serde_json::from_str(r#"{"allowedProtocols": ["https"], "removeHash": false}"#).unwrap();
    assert_eq!(
        sanitize_url_with("https://example.org/docs#intro", &opts).unwrap(),
        "https://example.org/docs#intro"
    );
    assert!(matches!(
        sanitize_url_with("http://example.org", &opts),
        Err(UrlError::DisallowedProtocol(_))
    ));

    let defaults: SanitizeOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(defaults, SanitizeOptions::default());
}

fn host_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "example.com",
        "www.example.org",
        "facebook.com",
        "m.facebook.com",
        "www.instagram.com",
        "mobile.twitter.com",
        "twitter.com",
        "www.tiktok.com",
        "de-de.facebook.com",
        "news.bbc.co.uk",
    ])
}

fn param_key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(TRACKING_PARAMS.to_vec()).prop_map(str::to_string),
        prop::sample::select(LANGUAGE_PARAMS.to_vec()).prop_map(str::to_string),
        prop::sample::select(vec!["s", "t", "igshid", "_t", "checksum"]).prop_map(str::to_string),
        "[a-z]{1,6}",
    ]
}

proptest! {
    #[test]
    fn test_sanitize_is_idempotent(
        scheme in prop::sample::select(vec!["http", "https"]),
        host in host_strategy(),
        path in prop::collection::vec("[a-zA-Z0-9_.-]{1,8}", 0..4),
        params in prop::collection::vec((param_key_strategy(), "[a-zA-Z0-9-]{0,8}"), 0..6),
        fragment in prop::option::of("[a-z]{1,6}"),
    ) {
        let query: Vec<String> = params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        let mut url = format!("{}://{}/{}", scheme, host, path.join("/"));
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }
        if let Some(fragment) = fragment {
            url.push('#');
            url.push_str(&fragment);
        }

        let once = sanitize_url(url.as_str()).unwrap();
        let twice = sanitize_url(once.as_str()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_tracking_params_always_removed(
        key in prop::sample::select([TRACKING_PARAMS, LANGUAGE_PARAMS].concat()),
        repeats in 1usize..4,
        keep in "[a-z]{1,6}",
    ) {
        prop_assume!(!TRACKING_PARAMS.contains(&keep.as_str()) && !LANGUAGE_PARAMS.contains(&keep.as_str()));

        let mut pairs = vec![format!("{}=1", keep)];
        pairs.extend((0..repeats).map(|i| format!("{}=x{}", key, i)));
        let url = format!("https://example.org/page?{}", pairs.join("&"));

        let sanitized = Url::parse(&sanitize_url(url.as_str()).unwrap()).unwrap();
        prop_assert!(sanitized.query_pairs().all(|(k, _)| k != key));
        prop_assert!(sanitized.query_pairs().any(|(k, _)| k == keep.as_str()));
    }
}
