use clap::Parser;

#[derive(Parser, Clone, Debug, Default)]
pub(crate) struct Verbosity {
    /// Use verbose output [default: false]
    #[clap(long, global = true)]
    pub(crate) verbose: bool,

    /// Log every tree mutation [default: false]
    #[clap(long, global = true)]
    pub(crate) trace: bool,

    /// Only show errors [default: false]
    #[clap(
        long,
        global = true,
        conflicts_with = "verbose",
        conflicts_with = "trace"
    )]
    pub(crate) quiet: bool,
}

impl Verbosity {
    pub(crate) fn level(&self) -> domkit_logger::Verbosity {
        if self.quiet {
            return domkit_logger::Verbosity::Quiet;
        }
        domkit_logger::Verbosity::from_flags(self.verbose, self.trace)
    }
}
