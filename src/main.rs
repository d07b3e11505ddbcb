mod base;
mod shell;

use anyhow::Context;

/// Personal income and expense tracker
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
struct Root {
    /// Directory holding the transaction and config files, defaulting to the
    /// current working directory
    #[arg(long, value_name = "DIR")]
    dir: Option<std::path::PathBuf>,
}

const GREETING: &str = "Welcome to Cashbook, your personal finance tracker.
Enter 'help' to see the available commands.";

fn main() {
    fn try_main() -> anyhow::Result<()> {
        let root = <Root as clap::Parser>::parse();
        let dir = match root.dir {
            Some(dir) => dir,
            None => {
                std::env::current_dir().context("failed to resolve current working directory")?
            }
        };
        let mut session = shell::Session::load(base::Fs::new(dir))?;

        println!("{}", GREETING);
        let mut stdin = std::io::stdin().lock();
        let mut line = String::new();
        loop {
            print!("> ");
            std::io::Write::flush(&mut std::io::stdout())?;
            line.clear();
            if std::io::BufRead::read_line(&mut stdin, &mut line)? == 0 {
                break;
            }
            match session.eval(&line) {
                Ok(output) => print!("{}", output),
                Err(e) => println!("{}", e),
            }
            if session.is_done() {
                break;
            }
        }
        Ok(())
    }

    if let Err(e) = try_main() {
        eprint!("error");
        e.chain().for_each(|cause| eprint!(": {}", cause));
        eprintln!();
        std::process::exit(1);
    }
}
