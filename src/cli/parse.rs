use clap::{Args, Parser, Subcommand, ValueEnum};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "period-gantt",
    about = "Gantt-style terminal charts for time intervals"
)]
pub struct Cli {
    /// Emit debug logs on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Chart a batch of random intervals
    Demo(DemoArgs),
    /// Chart intervals given as day offsets, e.g. `[0,14)`
    Draw(DrawArgs),
    /// Show available color names
    Colors,
    /// Print example invocations
    Examples,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LabelKind {
    #[default]
    Letter,
    Number,
    Roman,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ViewKind {
    #[default]
    Sequence,
    Intersections,
    Gaps,
    Unions,
    Diff,
}

/// Options shared by every chart-drawing subcommand.
#[derive(Args, Debug, Default)]
pub struct StyleArgs {
    /// Chart width in columns (fits the terminal if omitted)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Row colors, cycled in order
    #[arg(long, value_delimiter = ',')]
    pub colors: Vec<String>,

    /// Use every palette color in turn
    #[arg(long, conflicts_with_all = ["colors", "random_color"])]
    pub rainbow: bool,

    /// Pick one palette color at random
    #[arg(long, conflicts_with = "colors")]
    pub random_color: bool,

    #[arg(long, value_enum, default_value_t = LabelKind::Letter)]
    pub labels: LabelKind,

    /// Label alignment: left, right or center
    #[arg(long, default_value = "left")]
    pub align: String,

    /// Spaces between label and chart
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub gap: isize,

    /// Spaces before each label
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub margin: isize,

    #[arg(long)]
    pub body: Option<String>,
    #[arg(long)]
    pub space: Option<String>,
    #[arg(long)]
    pub start_included: Option<String>,
    #[arg(long)]
    pub start_excluded: Option<String>,
    #[arg(long)]
    pub end_included: Option<String>,
    #[arg(long)]
    pub end_excluded: Option<String>,

    /// Force ANSI escapes even when stdout is not a terminal
    #[arg(long, conflicts_with = "plain")]
    pub ansi: bool,

    /// Never emit ANSI escapes
    #[arg(long)]
    pub plain: bool,
}

/// `period-gantt demo …`
#[derive(Parser, Debug)]
pub struct DemoArgs {
    #[arg(long, default_value_t = 6)]
    pub rows: usize,

    /// Seed for the interval generator (time-based if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// `period-gantt draw …`
#[derive(Parser, Debug)]
pub struct DrawArgs {
    /// Interval as day offsets with bound brackets, e.g. `[0,14)` or `(3,20]`
    #[arg(long = "span", value_name = "SPAN", required = true)]
    pub spans: Vec<String>,

    #[arg(long, value_enum, default_value_t = ViewKind::Sequence)]
    pub view: ViewKind,

    /// Label of the result row (views other than `sequence`)
    #[arg(long)]
    pub result_label: Option<String>,

    #[command(flatten)]
    pub style: StyleArgs,
}
