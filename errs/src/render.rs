use std::fmt::Write as _;

use errs_core::Code;
use http::header::CONTENT_TYPE;

use crate::args::{Args, Transport};

/// Build the error described by the command line
pub fn build_error(args: &Args) -> anyhow::Error {
    let app = errs_core::Error::new(Code::from_slug(&args.code), args.message.clone());
    let mut err = if args.plain_error {
        anyhow::Error::msg(args.message.clone())
    } else if args.as_context {
        anyhow::Error::new(std::io::Error::other("underlying failure")).context(app)
    } else {
        anyhow::Error::new(app)
    };

    for context in &args.wrap {
        err = err.context(context.clone());
    }

    err
}

/// Render an error with the selected transport adapter
pub fn render(transport: Transport, err: &anyhow::Error) -> String {
    match transport {
        Transport::Http => {
            let response = errs_http::render_anyhow(err);
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();

            let mut out = String::new();
            let _ = writeln!(out, "{}", response.status());
            let _ = writeln!(out, "content-type: {content_type}");
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", String::from_utf8_lossy(response.body()));
            out
        }
        Transport::Grpc => {
            let status = errs_grpc::status_from_anyhow(err);
            format!("code={:?} message={}\n", status.code(), status.message())
        }
        Transport::Connect => {
            let connect = errs_connect::from_anyhow(err);
            let body = connect
                .to_json()
                .map_or_else(|e| e.to_string(), |b| String::from_utf8_lossy(&b).into_owned());
            format!("{}\n{body}\n", connect.code().http_status())
        }
    }
}
