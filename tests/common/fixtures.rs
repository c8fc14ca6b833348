//! Reusable test content

pub const MAINTENANCE_HTML: &[u8] = b"<!doctype html>
<html>
  <head><title>Down for maintenance</title></head>
  <body><h1>We'll be back soon.</h1></body>
</html>
";

/// PNG signature followed by arbitrary bytes, including a NUL
pub const MAINTENANCE_ICON: &[u8] = &[
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0xFF,
];

/// Commands that always succeed
pub const PASSING_COMMANDS: &str = r#"
[commands]
build = "true"
deploy = "true"
"#;

/// Build fails, deploy would succeed
pub const FAILING_BUILD: &str = r#"
[commands]
build = "false"
deploy = "true"
"#;

/// Build succeeds, deploy fails
pub const FAILING_DEPLOY: &str = r#"
[commands]
build = "true"
deploy = "false"
"#;
