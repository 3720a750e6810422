use crate::CLAP_STYLING;
use clap::arg;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("glossa")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("glossa")
        .about(
            "Scrapes the languageguide.org English vocabulary into an IPA-annotated \
            English/Portuguese spreadsheet",
        )
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and progress output").required(false))
        .arg(
            arg!(-c --"config" <PATH>)
                .required(false)
                .help("TOML settings file (default: ./glossa.toml when present)")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            arg!(-d --"dir" <PATH>)
                .required(false)
                .help("Directory holding the checkpoint files and the spreadsheet")
                .default_value("."),
        )
        .arg(
            arg!(--"force" <STAGE>)
                .required(false)
                .help(
                    "Recompute a stage even when its file exists. Later stages are \
                    recomputed too. May be given more than once.",
                )
                .value_parser(["catalog", "words", "annotated", "all"])
                .action(clap::ArgAction::Append),
        )
        .arg(
            arg!(--"dictionary" <PATH>)
                .required(false)
                .help("CMU Pronouncing Dictionary file (overrides the settings file)")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
}
