//! Runs the Portugol front end over a source file:
//! tokenizes, parses, and re-analyzes the program,
//! writing each stage's result to a report file.

use std::path::PathBuf;
use std::{fs, io};

use clap::Parser;
use portugol_lang::err::FullGolErr;
use portugol_lang::{lexer, parser, semantic};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The source file to analyze.
    ///
    /// If omitted, a built-in sample program is analyzed instead.
    file: Option<PathBuf>,

    /// The directory where tokens.txt, ast.txt, and semantic_analysis.txt
    /// are written.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

const SAMPLE: &str = r#"programa
inteiro x, y;
escreva("Olá, mundo!");
leia(x);
if (x > 0) {
  y := x * 2;
  escreva("O dobro de ", x, " é ", y);
} else {
  escreva("O valor de x é negativo");
}
fimprog
"#;

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let code = match &cli.file {
        Some(fp) => fs::read_to_string(fp)?,
        None => String::from(SAMPLE),
    };

    macro_rules! unwrap_or_exit {
        ($r:expr) => {
            match $r {
                Ok(t) => t,
                Err(fe) => {
                    eprintln!("{}", FullGolErr::from(fe).full_msg(&code));
                    std::process::exit(1);
                }
            }
        };
    }

    fs::create_dir_all(&cli.out_dir)?;

    let tokens = unwrap_or_exit! { lexer::tokenize(&code) };

    let token_lines: String = tokens
        .iter()
        .map(|t| format!("({}, {})\n", t.tt, t.tt.kind()))
        .collect();
    fs::write(cli.out_dir.join("tokens.txt"), &token_lines)?;

    println!("Tokens:");
    print!("{token_lines}");

    let ast = unwrap_or_exit! { parser::parse(tokens) };
    fs::write(cli.out_dir.join("ast.txt"), format!("{ast:#?}\n"))?;

    let table = unwrap_or_exit! { semantic::analyze(&ast) };
    fs::write(cli.out_dir.join("semantic_analysis.txt"), table.to_string())?;

    println!("\nAST:");
    println!("{ast:#?}");

    println!("\nPrograma reconstruído:");
    println!("{ast}");

    println!("\nResultados da Análise Semântica:");
    print!("{table}");

    Ok(())
}
