use crate::prelude::{eprintln, *};
use clap::Parser;
use strkit_core::{HashCasePolicy, PluginConfig, StringPlugin};

mod error;
mod list;
mod mcp;
mod prelude;
mod run;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Convert, hash, split and generate strings"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// How hash algorithms spelled in two cases are registered (prefer-upper, keep-all)
    #[clap(
        long,
        env = "STRKIT_HASH_CASE_POLICY",
        global = true,
        default_value = "prefer-upper"
    )]
    hash_case_policy: HashCasePolicy,

    /// Prefix prepended to every catalog label
    #[clap(
        long,
        env = "STRKIT_LABEL_PREFIX",
        global = true,
        default_value = "String: "
    )]
    label_prefix: String,

    /// Whether to display additional information.
    #[clap(long, env = "STRKIT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    pub fn plugin_config(&self) -> PluginConfig {
        PluginConfig {
            hash_case_policy: self.hash_case_policy,
            label_prefix: self.label_prefix.clone(),
        }
    }

    /// Build the plugin the subcommands dispatch through.
    pub fn start_plugin(&self) -> StringPlugin {
        let plugin = StringPlugin::on_start(self.plugin_config());

        if self.verbose {
            eprintln!(
                "Registered {} functors (hash case policy: {})",
                plugin.registry().len(),
                self.hash_case_policy
            );
        }

        plugin
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// List every available functor
    List(crate::list::ListOptions),

    /// Run a functor against an input string
    Run(crate::run::RunOptions),

    /// Model Context Protocol server exposing every functor as a tool
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::List(options) => crate::list::run(options, app.global),
        SubCommands::Run(options) => crate::run::run(options, app.global),
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
