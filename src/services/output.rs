use crate::domain::models::{CodedError, ErrorBody, JsonFail, JsonOut};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(json: bool, data: T, row: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Failure envelope on stdout in JSON mode, `error:` line on stderr otherwise.
pub fn render_failure(json: bool, err: &anyhow::Error) {
    let code = err
        .downcast_ref::<CodedError>()
        .map(|e| e.code)
        .unwrap_or("INTERNAL");
    if json {
        let fail = JsonFail {
            ok: false,
            error: ErrorBody {
                code: code.to_string(),
                message: format!("{}", err),
            },
        };
        match serde_json::to_string_pretty(&fail) {
            Ok(body) => println!("{}", body),
            Err(_) => eprintln!("error: {}", err),
        }
    } else {
        eprintln!("error: {}", err);
    }
}
