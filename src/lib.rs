// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::schema::Kind;
use crate::types::error::YamlSnafu;
use snafu::ResultExt;
use std::pin::Pin;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod codec;
pub mod schema;
pub mod types;

#[cfg(test)]
mod tests;

/// Output format of `schema`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();
}

async fn open_output(
    file: Option<String>,
) -> Result<Pin<Box<dyn AsyncWrite + Send>>, Box<dyn std::error::Error>> {
    Ok(if let Some(file) = file {
        Box::pin(
            tokio::fs::OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .open(file)
                .await?,
        )
    } else {
        Box::pin(tokio::io::stdout())
    })
}

async fn read_input(input: Option<String>) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut reader: Pin<Box<dyn AsyncRead + Send>> = if let Some(input) = input {
        Box::pin(tokio::fs::File::open(input).await?)
    } else {
        Box::pin(tokio::io::stdin())
    };

    let mut body = Vec::new();
    reader.read_to_end(&mut body).await?;
    Ok(body)
}

/// Writes the JSON Schema of `kind` to `file`, or stdout.
pub async fn schema(
    kind: Kind,
    format: Format,
    file: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let schema = kind.json_schema();
    let rendered = match format {
        Format::Yaml => serde_yaml_ng::to_string(&schema).context(YamlSnafu)?,
        Format::Json => codec::encode_pretty(&schema)? + "\n",
    };

    let mut writer = open_output(file).await?;
    writer.write_all(rendered.as_bytes()).await?;
    writer.flush().await?;

    info!("wrote schema for {}", kind);
    Ok(())
}

/// Reads a payload of `kind` and writes it back in canonical form.
pub async fn canonicalize(
    kind: Kind,
    input: Option<String>,
    file: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = read_input(input).await?;
    let canonical = kind.canonicalize(&body)? + "\n";

    let mut writer = open_output(file).await?;
    writer.write_all(canonical.as_bytes()).await?;
    writer.flush().await?;

    Ok(())
}

pub async fn validate(kind: Kind, input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let body = read_input(input).await?;
    kind.validate(&body)?;
    Ok(())
}

pub async fn default_node_type() -> Result<(), Box<dyn std::error::Error>> {
    let rendered = codec::encode_pretty(&types::v1::default_elasticsearch_node_type())? + "\n";

    let mut writer = open_output(None).await?;
    writer.write_all(rendered.as_bytes()).await?;
    writer.flush().await?;

    Ok(())
}
