use once_cell::sync::Lazy;
use regex::Regex;

/// One matched access-log line, one owned field per capture.
///
/// Only `request_url` and `request_time` feed the statistics downstream; the
/// remaining fields are captured so a matched line survives in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRecord {
    pub remote_addr: String,
    pub remote_user: String,
    pub http_x_real_ip: String,
    pub time_local: String,
    pub request_method: String,
    pub request_url: String,
    pub request_protocol: String,
    pub status: String,
    pub body_bytes_sent: String,
    pub http_referer: String,
    pub http_user_agent: String,
    pub http_x_forwarded_for: String,
    pub http_x_request_id: String,
    pub http_x_rb_user: String,
    pub request_time: String,
}

// $remote_addr $remote_user $http_x_real_ip [$time_local] "$request"
// $status $body_bytes_sent "$http_referer" "$http_user_agent"
// "$http_x_forwarded_for" "$http_X_REQUEST_ID" "$http_X_RB_USER" $request_time
//
// Permissive on field content, strict on the bracket/quote structure and on
// the trailing request time, which must carry a fractional part.
static LOG_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
        ^
        (?P<remote_addr>[\d.]+)\s
        (?P<remote_user>\S*)\s+
        (?P<http_x_real_ip>\S*)\s
        \[(?P<time_local>.*?)\]\s
        "(?P<request_method>.*?)\s(?P<request_url>.*?)\s(?P<request_protocol>.*?)"\s
        (?P<status>\d+)\s
        (?P<body_bytes_sent>\S*)\s
        "(?P<http_referer>.*?)"\s
        "(?P<http_user_agent>.*?)"\s
        "(?P<http_x_forwarded_for>.*?)"\s
        "(?P<http_x_request_id>.*?)"\s
        "(?P<http_x_rb_user>.*?)"\s
        (?P<request_time>\d+\.\d+)\s*
        $
        "#,
    )
    .expect("access-log grammar compiles")
});

/// Match one raw line against the access-log grammar.
///
/// `None` is not an error: the caller counts unmatched lines and applies its
/// own tolerance policy.
pub fn parse_line(line: &str) -> Option<AccessRecord> {
    let caps = LOG_LINE.captures(line)?;
    let field = |name: &str| caps[name].to_string();

    Some(AccessRecord {
        remote_addr: field("remote_addr"),
        remote_user: field("remote_user"),
        http_x_real_ip: field("http_x_real_ip"),
        time_local: field("time_local"),
        request_method: field("request_method"),
        request_url: field("request_url"),
        request_protocol: field("request_protocol"),
        status: field("status"),
        body_bytes_sent: field("body_bytes_sent"),
        http_referer: field("http_referer"),
        http_user_agent: field("http_user_agent"),
        http_x_forwarded_for: field("http_x_forwarded_for"),
        http_x_request_id: field("http_x_request_id"),
        http_x_rb_user: field("http_x_rb_user"),
        request_time: field("request_time"),
    })
}
