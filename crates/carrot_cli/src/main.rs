use anyhow::{Context, Result};
use carrot_diagnostics::{DiagnosticSink, Emitter};
use carrot_driver::check;
use carrot_syntax::Lexer;
use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "carrotc")]
#[command(about = "Carrot 编译器前端 - 词法、语法与名称分析", version)]
struct Cli {
    /// 输出调试日志 (等价于 RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// 禁用彩色输出
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 检查语法和名称错误
    Check {
        /// 输入文件
        input: PathBuf,

        /// 分析结束后打印全局符号表
        #[arg(long)]
        dump_symbols: bool,
    },

    /// 打印 Token 序列及其位置
    Tokens {
        /// 输入文件
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let emitter = if cli.no_color {
        colored::control::set_override(false);
        Emitter::without_colors()
    } else {
        Emitter::new()
    };

    let failed = match cli.command {
        Commands::Check {
            input,
            dump_symbols,
        } => cmd_check(&input, dump_symbols, &emitter)?,
        Commands::Tokens { input } => cmd_tokens(&input, &emitter)?,
    };

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

/// 日志写到 stderr；`-v` 优先于 RUST_LOG
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_source(input: &Path) -> Result<String> {
    fs::read_to_string(input).with_context(|| format!("无法读取 {}", input.display()))
}

/// 检查命令；返回是否有致命错误
fn cmd_check(input: &Path, dump_symbols: bool, emitter: &Emitter) -> Result<bool> {
    let source = read_source(input)?;
    let name = input.display().to_string();
    tracing::info!(file = %name, "checking");

    let output = match check(&source) {
        Ok(output) => output,
        Err(err) => {
            err.emit(emitter, Some((name.as_str(), source.as_str())));
            eprintln!("{}", format!("❌ {}", err).red().bold());
            return Ok(true);
        }
    };

    for diagnostic in output.diagnostics.diagnostics() {
        emitter.emit_with_source(diagnostic, &name, &source);
    }

    if dump_symbols {
        print!("{}", output.analysis.scopes.dump());
    }

    if output.has_errors() {
        eprintln!(
            "{}",
            format!(
                "❌ 发现 {} 个错误, {} 个警告",
                output.diagnostics.error_count(),
                output.diagnostics.warning_count()
            )
            .red()
            .bold()
        );
        return Ok(true);
    }

    println!("{}", format!("✅ {} 无错误", name).green());
    Ok(false)
}

/// Token 命令；返回是否有词法错误
fn cmd_tokens(input: &Path, emitter: &Emitter) -> Result<bool> {
    let source = read_source(input)?;
    let name = input.display().to_string();

    let mut sink = DiagnosticSink::new();
    let tokens = Lexer::new(&source).tokenize(&mut sink);

    for token in &tokens {
        println!("{}\t{}", token.span.start, token.token);
    }
    for diagnostic in sink.diagnostics() {
        emitter.emit_with_source(diagnostic, &name, &source);
    }

    Ok(sink.has_errors())
}
