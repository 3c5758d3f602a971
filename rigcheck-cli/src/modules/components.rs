use rigcheck::rigcheck_core::Category;
use structopt::StructOpt;

use crate::{run_impl, run_impl_struct};

#[derive(StructOpt)]
pub struct Components {
    #[structopt(subcommand)]
    query: Query,
}

run_impl_struct!(Components, query);

#[derive(StructOpt)]
enum Query {
    /// Catalog entries in declaration order.
    List {
        category: Category,
        #[structopt(long, default_value = "50")]
        limit: usize,
    },
    /// Entries whose name contains the query.
    Search { category: Category, query: String },
    /// The first entry whose name contains the query, or null.
    Details { category: Category, query: String },
}

run_impl!(Query, self, ctx, ser, {
    match self {
        Self::List { category, limit } => {
            erased_serde::serialize(&ctx.engine.list_components(*category, *limit), ser)?;
        }
        Self::Search { category, query } => {
            erased_serde::serialize(&ctx.engine.search_components(*category, query), ser)?;
        }
        Self::Details { category, query } => {
            erased_serde::serialize(&ctx.engine.component_details(*category, query), ser)?;
        }
    }
});
