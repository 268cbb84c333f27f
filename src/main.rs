use clap::Parser;
use mrt_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("MRT Processor - Machine-Readable Table Parser");
    println!("=============================================");
    println!();
    println!("Parse the byte-by-byte machine-readable tables published by AAS journals");
    println!("(ApJ, AJ, ApJS) and report their column layout and field values.");
    println!();
    println!("USAGE:");
    println!("    mrt-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse a table and report rows and statistics (main command)");
    println!("    columns     Show the column specifications declared by a table header");
    println!("    validate    Check that one file or every table in a directory parses cleanly");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Parse a table and preview the first ten rows:");
    println!("    mrt-processor parse table1.txt");
    println!();
    println!("    # Emit every row as JSON for scripting:");
    println!("    mrt-processor parse table1.txt --output-format json --max-rows 0");
    println!();
    println!("    # Split by explicit byte offsets instead of the header:");
    println!("    mrt-processor parse table1.txt --col-starts 0,23,26 --col-ends 22,25,37");
    println!();
    println!("    # Show the column layout a header declares:");
    println!("    mrt-processor columns table1.txt");
    println!();
    println!("    # Validate every .txt table under a directory:");
    println!("    mrt-processor validate tables/ --extension txt");
    println!();
    println!("For detailed help on any command, use:");
    println!("    mrt-processor <COMMAND> --help");
}
