use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pkgdoc")]
#[command(author, version, about = "Query Go package documentation from pkg.go.dev")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration to .pkgdoc/config.toml
    Init {
        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },

    /// Look up a package, symbol, method or glob pattern
    ///
    /// Examples: `strings`, `strings Builder`, `strings Builder.Write*`,
    /// `strings *.WriteString`, `io.Reader`
    Doc {
        /// Zero to three arguments: package, symbol, method
        args: Vec<String>,
    },

    /// Page through the functions of a package
    Funcs {
        /// Package import path, e.g. `strings` or `net/http`
        package: String,
    },

    /// Page through the types of a package
    Types {
        /// Package import path, e.g. `strings` or `net/http`
        package: String,
    },

    /// Start the HTTP API
    Serve {
        /// Host to bind to (default: server.host from config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (default: server.port from config)
        #[arg(short, long)]
        port: Option<u16>,
    },
}
