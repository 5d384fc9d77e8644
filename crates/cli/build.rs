use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("pagelift")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn web pages into structured, readable text")
        .arg(clap::arg!(<INPUT> "URL to fetch, local HTML file, or '-' for stdin"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (content, json, csv, text)")
                .value_name("FORMAT")
                .default_value("content")
                .value_parser(["content", "json", "csv", "text"]),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("10"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(
            clap::arg!(--"min-paragraph-chars" <NUM> "Paragraphs at or below this many characters are dropped")
                .default_value("20"),
        )
        .arg(
            clap::arg!(--"min-code-chars" <NUM> "Code blocks at or below this many characters are dropped")
                .default_value("10"),
        )
        .arg(clap::arg!(--stats "Print document statistics to stderr"))
        .arg(clap::arg!(-v --verbose "Show progress and timings on stderr"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "pagelift", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "pagelift", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "pagelift", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "pagelift", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
