use crate::commands::{
    run_bill, run_lookup, run_track, run_upload_check, BillArgs, LookupArgs, TrackArgs,
    UploadCheckArgs,
};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use water_portal::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Water Portal",
    about = "Run the municipal water portal API or exercise its citizen services from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Compute a water bill from connection type, meter mode, and readings
    Bill(BillArgs),
    /// Look up an application, first connection, or grievance by tracking ID
    Track(TrackArgs),
    /// Search the property directory by property number, consumer ID, or mobile
    Lookup(LookupArgs),
    /// Check a local file against the document or meter photo upload policy
    UploadCheck(UploadCheckArgs),
    /// Walk through every citizen service end to end
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Bill(args) => run_bill(args),
        Command::Track(args) => run_track(args),
        Command::Lookup(args) => run_lookup(args).await,
        Command::UploadCheck(args) => run_upload_check(args),
        Command::Demo(args) => run_demo(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use water_portal::portal::billing::ConnectionType;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["water-portal-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn bill_arguments_parse() {
        let cli = Cli::try_parse_from([
            "water-portal-api",
            "bill",
            "--connection-type",
            "residential",
            "--mode",
            "meter",
            "--previous",
            "100",
            "--current",
            "150",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Bill(args)) => {
                assert_eq!(args.connection_type, ConnectionType::Residential);
                assert!(args.previous.is_some());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn upload_kind_is_validated() {
        let result = Cli::try_parse_from([
            "water-portal-api",
            "upload-check",
            "meter.jpg",
            "--kind",
            "selfie",
        ]);
        assert!(result.is_err());
    }
}
