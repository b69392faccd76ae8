//! CLI runner - executes commands

use crate::classification::{self, to_token, Classification, ClassificationSelection, BUCKETS};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_config, ExplorerConfig};
use crate::dataset::{load_dataset, Dataset};
use crate::error::Result;
use crate::grid::{GridCell, PeriodicGrid};
use crate::listing::CompoundListing;
use crate::pagination::{resolve_page, PaginationState, RowsPerPage};
use crate::search::{search, SearchQuery};
use crate::url_state::{
    classification_path, compounds_path, decode_classification, decode_with, element_path,
    encode_query, parse_query,
};
use serde_json::{json, Value};
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
    config: ExplorerConfig,
}

/// Load the config file named on the command line, applying `--dataset`
pub fn load_cli_config(cli: &Cli) -> Result<ExplorerConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ExplorerConfig::default(),
    };

    if let Some(dataset) = &cli.dataset {
        config.dataset = Some(dataset.clone());
    }

    Ok(config)
}

impl Runner {
    /// Create a runner, loading the config file
    pub fn new(cli: Cli) -> Result<Self> {
        let config = load_cli_config(&cli)?;
        Ok(Self::with_config(cli, config))
    }

    /// Create a runner with an already-loaded config
    pub fn with_config(cli: Cli, config: ExplorerConfig) -> Self {
        Self { cli, config }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Run the CLI command and print its message
    pub fn run(&self) -> Result<()> {
        let message = self.execute()?;
        self.output_message(&message);
        Ok(())
    }

    /// Run the CLI command and return its message
    pub fn execute(&self) -> Result<Value> {
        debug!(command = self.cli.command.name(), "executing command");

        match &self.cli.command {
            Commands::Grid {
                query,
                classification: token,
            } => self.grid(query.as_deref(), token.as_deref()),
            Commands::Element { slug } => self.element(slug),
            Commands::Compounds {
                slug,
                query_string,
                search,
            } => self.compounds(slug, query_string.as_deref(), search.as_deref()),
            Commands::Window {
                current,
                total,
                siblings,
            } => Ok(self.window(*current, *total, *siblings)),
            Commands::Resize {
                page,
                old,
                new,
                total,
            } => self.resize(*page, *old, *new, *total),
            Commands::Classify { code } => Ok(Self::classify(code)),
            Commands::Decode { query_string } => self.decode(query_string),
            Commands::Classifications => Ok(Self::classifications()),
        }
    }

    /// Load the dataset named by the config, or the bundled one
    fn load_dataset(&self) -> Result<Dataset> {
        load_dataset(self.config.dataset.as_deref())
    }

    /// Render the grid
    fn grid(&self, query: Option<&str>, highlight: Option<&str>) -> Result<Value> {
        let dataset = self.load_dataset()?;

        let selection = ClassificationSelection::from(highlight.and_then(decode_classification));

        let query = query.map_or_else(SearchQuery::none, SearchQuery::from_input);
        let results = search(dataset.elements(), &query);
        let grid = PeriodicGrid::build(&dataset, self.config.grid, selection, &results)?;

        Ok(json!({
            "type": "GRID",
            "classification": selection.selected(),
            "query": query.as_str(),
            "matches": results.query_present.then_some(results.len()),
            "table": render_table(&grid),
            "unplaced": grid.unplaced,
            "tiles": grid.tiles().collect::<Vec<_>>(),
        }))
    }

    /// Show one element
    fn element(&self, slug: &str) -> Result<Value> {
        let dataset = self.load_dataset()?;
        let element = dataset.by_slug(slug)?;
        let bucket = element.classification();

        Ok(json!({
            "type": "ELEMENT",
            "element": {
                "number": element.number,
                "name": element.name,
                "symbol": element.symbol,
                "atomic_mass": element.atomic_mass,
                "category_code": element.category_code,
                "classification": bucket.category,
                "color": bucket.color,
                "compounds": element.compounds.len(),
            },
            "path": element_path(element),
            "compounds_path": compounds_path(element),
        }))
    }

    /// One page of an element's compounds
    fn compounds(
        &self,
        slug: &str,
        query_string: Option<&str>,
        search: Option<&str>,
    ) -> Result<Value> {
        let dataset = self.load_dataset()?;
        let element = dataset.by_slug(slug)?;

        let params = parse_query(query_string.unwrap_or_default())?;
        let mut state = decode_with(&params, self.config.default_rows)?;
        if let Some(search) = search {
            state = state.with_search(SearchQuery::from_input(search));
        }

        let listing = CompoundListing::build(
            compounds_path(element),
            &element.compounds,
            &state,
            self.config.window,
        )?;

        Ok(json!({
            "type": "COMPOUNDS",
            "element": element.name,
            "listing": listing,
        }))
    }

    /// Compute a page window
    fn window(&self, current: u32, total: u32, siblings: Option<u32>) -> Value {
        let sibling_count = siblings.unwrap_or(self.config.window.sibling_count);
        let state = PaginationState::new(current, total, sibling_count);
        let controls = state.controls(self.config.window.collapse_threshold);

        json!({
            "type": "WINDOW",
            "current": current,
            "total": total,
            "sibling_count": sibling_count,
            "window": controls.iter().map(|c| c.token).collect::<Vec<_>>(),
            "controls": controls,
        })
    }

    /// Page after a rows-per-page change
    fn resize(&self, page: u32, old: u32, new: u32, total: u64) -> Result<Value> {
        let old_rows = RowsPerPage::try_from(old)?;
        let new_rows = RowsPerPage::try_from(new)?;
        let resolved = resolve_page(page, old_rows, new_rows, total)?;

        Ok(json!({
            "type": "PAGE",
            "page": resolved,
            "rows": new_rows,
        }))
    }

    /// Resolve a category code
    fn classify(code: &str) -> Value {
        let bucket = classification::resolve(code);

        json!({
            "type": "CLASSIFICATION",
            "code": code,
            "classification": bucket.classification,
            "category": bucket.category,
            "token": to_token(bucket.category),
            "fallback": bucket.is_fallback(),
            "color": bucket.color,
            "hover_color": bucket.hover_color,
        })
    }

    /// Decode a query string
    fn decode(&self, query_string: &str) -> Result<Value> {
        let params = parse_query(query_string)?;
        let state = decode_with(&params, self.config.default_rows)?;

        Ok(json!({
            "type": "STATE",
            "state": state,
            "query": encode_query(&state),
        }))
    }

    /// List every bucket
    fn classifications() -> Value {
        let buckets: Vec<Value> = BUCKETS
            .iter()
            .map(|bucket| {
                json!({
                    "classification": bucket.classification,
                    "category": bucket.category,
                    "token": to_token(bucket.category),
                    "path": classification_path(bucket.classification),
                    "fallback": bucket.is_fallback(),
                    "color": bucket.color,
                    "hover_color": bucket.hover_color,
                })
            })
            .collect();

        json!({
            "type": "CLASSIFICATIONS",
            "classifications": buckets,
            "public": Classification::public().count(),
        })
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Text rendering of the grid, one string per row
///
/// Each cell is four columns wide: `.` for an empty cell, `-` for a tile
/// dimmed by search, otherwise the symbol with `*` when highlighted.
pub fn render_table(grid: &PeriodicGrid) -> Vec<String> {
    grid.rows()
        .map(|row| {
            let line: String = row
                .iter()
                .map(|cell| {
                    let text = match cell {
                        GridCell::Empty { .. } => ".".to_string(),
                        GridCell::Element { tile, .. } => {
                            let style = tile.overlay.style();
                            if style.dimmed {
                                "-".to_string()
                            } else if tile.overlay.highlighted {
                                format!("{}*", tile.symbol)
                            } else {
                                tile.symbol.clone()
                            }
                        }
                    };
                    format!("{text:<4}")
                })
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}
