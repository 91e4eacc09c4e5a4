// Copyright 2024 RustFS Team
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

use clap::{Parser, Subcommand};
use ece_api::Format;
use ece_api::schema::Kind;
use shadow_rs::shadow;

shadow!(build);

const LONG_VERSION: &str = const_str::concat!(
    build::PKG_VERSION,
    " (",
    build::SHORT_COMMIT,
    " ",
    build::BUILD_TIME,
    ")\nrustc: ",
    build::RUST_VERSION
);

#[derive(Parser)]
#[command(name = "ece-api")]
#[command(about = "Elastic Cloud Enterprise cluster API payload tool", long_about = None)]
#[command(version = build::PKG_VERSION, long_version = LONG_VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Output the JSON Schema of a payload type
    Schema {
        kind: Kind,

        #[arg(long, value_enum, default_value_t = Format::Yaml)]
        format: Format,

        /// Optional output path. If not set, the output will be written to stdout.
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Decode a payload and print it with only the known fields
    Canonicalize {
        kind: Kind,

        /// Payload to read. Reads stdin when not set.
        #[arg(short, long)]
        input: Option<String>,

        /// Optional output path. If not set, the output will be written to stdout.
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Decode a payload and check it before it is sent
    Validate {
        kind: Kind,

        /// Payload to read. Reads stdin when not set.
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Print the node type used for tiers without explicit roles
    DefaultNodeType {},
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    ece_api::init_tracing();

    match cli.command {
        Commands::Schema { kind, format, file } => ece_api::schema(kind, format, file).await?,
        Commands::Canonicalize { kind, input, file } => {
            ece_api::canonicalize(kind, input, file).await?
        }
        Commands::Validate { kind, input } => ece_api::validate(kind, input).await?,
        Commands::DefaultNodeType {} => ece_api::default_node_type().await?,
    }

    Ok(())
}
