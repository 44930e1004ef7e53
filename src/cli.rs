use clap::Parser;
use std::path::PathBuf;
use sysdeps::application::dto::OutputFormat;
use sysdeps::config::SettingsOverrides;

/// Resolve Maven dependencies against POM and jar files installed on this system
#[derive(Parser, Debug)]
#[command(name = "sysdeps")]
#[command(version)]
#[command(
    about = "Resolve Maven dependencies against POM and jar files installed on this system",
    long_about = None
)]
pub struct Args {
    /// Declared dependency as groupId:artifactId[:version]
    /// Can be specified multiple times: -d org.slf4j:slf4j-api -d com.google.guava:guava
    #[arg(short = 'd', long = "dependency", value_name = "COORDINATE")]
    pub dependencies: Vec<String>,

    /// Dependency declared only for tests
    #[arg(short = 't', long = "test-dependency", value_name = "COORDINATE")]
    pub test_dependencies: Vec<String>,

    /// Applied plugin id (e.g. com.github.johnrengelman.shadow)
    #[arg(long = "plugin", value_name = "ID")]
    pub plugins: Vec<String>,

    /// Directory holding installed POM files (repeatable)
    #[arg(long = "poms-dir", value_name = "DIR")]
    pub poms_dirs: Vec<PathBuf>,

    /// Directory holding installed jar files
    #[arg(long = "jars-dir", value_name = "DIR")]
    pub jars_dir: Option<PathBuf>,

    /// How many directory levels to search below each root
    #[arg(long = "scan-depth", value_name = "N")]
    pub scan_depth: Option<usize>,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./sysdeps.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Index every POM once before resolving instead of walking per lookup
    #[arg(long)]
    pub index: bool,

    /// Classify every installed POM and list the BOMs found
    #[arg(long = "list-boms")]
    pub list_boms: bool,

    /// Exit with code 1 when a dependency or its jar is not installed
    #[arg(long = "fail-on-missing")]
    pub fail_on_missing: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Flags that take part in the settings merge.
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            dependencies: self.dependencies.clone(),
            test_dependencies: self.test_dependencies.clone(),
            plugins: self.plugins.clone(),
            poms_dirs: self.poms_dirs.clone(),
            jars_dir: self.jars_dir.clone(),
            scan_depth: self.scan_depth,
            format: self.format,
            use_index: self.index,
        }
    }
}
