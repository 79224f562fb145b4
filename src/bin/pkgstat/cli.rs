//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;
use url::Url;

use pkgstat::sources::DEFAULT_MIRROR;
use pkgstat::Arch;

/// Report the Debian packages with the most files for an architecture
#[derive(Parser)]
#[command(name = "pkgstat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target architecture (i386, amd64, armel, arm64, armhf, mips, mipsel, mips64el, ppc64el, s390x)
    #[arg(required_unless_present = "completions")]
    pub arch: Option<Arch>,

    /// Number of packages to report
    #[arg(short = 'n', long = "top", value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Keep the downloaded manifest instead of deleting it
    #[arg(long)]
    pub keep: bool,

    /// Mirror base URL holding the Contents manifests
    #[arg(long, value_name = "URL", default_value = DEFAULT_MIRROR)]
    pub mirror: Url,

    /// Analyze a local manifest (plain or .gz) instead of downloading
    #[arg(long, value_name = "FILE", conflicts_with = "mirror")]
    pub input: Option<PathBuf>,

    /// Emit the ranking as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completions
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
