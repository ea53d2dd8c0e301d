use clap::Args;

/// Arguments naming both ends of a road
#[derive(Args, Debug, Clone)]
pub struct EdgeArgs {
    /// Source municipality
    pub source: String,

    /// Destination municipality
    pub destination: String,
}

#[derive(Args, Debug, Clone)]
pub struct AddEdgeArgs {
    #[command(flatten)]
    pub edge: EdgeArgs,

    /// Road distance in km (must be greater than 0)
    #[arg(long, short)]
    pub distance: f64,
}

/// The edge list only stores roads, so a new municipality always comes with one
#[derive(Args, Debug, Clone)]
pub struct AddNodeArgs {
    /// Municipality name
    pub name: String,

    /// Existing municipality to connect the new one to
    #[arg(long)]
    pub connect: String,

    /// Distance in km for the new road (must be greater than 0)
    #[arg(long, short)]
    pub distance: f64,
}

#[derive(Args, Debug, Clone)]
pub struct TraverseArgs {
    /// Start municipality
    pub start: String,

    /// Replay the visit order one step at a time
    #[arg(long)]
    pub animate: bool,

    /// Pause between animation steps (overrides config)
    #[arg(long, requires = "animate")]
    pub delay_ms: Option<u64>,
}
