use crate::domain::model::Resolution;
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Env,
    Php,
}

#[derive(Serialize)]
struct JsonView<'a> {
    #[serde(flatten)]
    resolution: &'a Resolution,
    scgi_host: String,
    scgi_port: u16,
}

pub fn render(resolution: &Resolution, format: OutputFormat) -> Result<String> {
    let base_dir = resolution.base_dir.path.to_string_lossy();
    let scgi_host = resolution.socket.scgi_host();
    let scgi_port = resolution.socket.scgi_port();

    let out = match format {
        OutputFormat::Text => format!(
            "base_dir={}\nscgi_host={}\nscgi_port={}\n",
            base_dir, scgi_host, scgi_port
        ),
        OutputFormat::Json => {
            let view = JsonView {
                resolution,
                scgi_host,
                scgi_port,
            };
            let mut json = serde_json::to_string_pretty(&view)?;
            json.push('\n');
            json
        }
        OutputFormat::Env => format!(
            "export RTORRENT_BASEDIR={}\nexport SCGI_HOST={}\nexport SCGI_PORT={}\n",
            shell_quote(&base_dir),
            shell_quote(&scgi_host),
            scgi_port
        ),
        OutputFormat::Php => format!(
            "<?php\n$scgi_host = {};\n$scgi_port = {};\n?>\n",
            php_quote(&scgi_host),
            scgi_port
        ),
    };
    Ok(out)
}

/// Single-quoted for POSIX sh; embedded quotes become `'\''`.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

fn php_quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', r"\\").replace('\'', r"\'"))
}
