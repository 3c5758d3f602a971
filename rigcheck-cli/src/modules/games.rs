use structopt::StructOpt;

use crate::{common::Run, run_impl, run_impl_struct};

#[derive(StructOpt)]
pub struct Games {
    #[structopt(subcommand)]
    query: Query,
}

run_impl_struct!(Games, query);

#[derive(StructOpt)]
enum Query {
    /// Top rated games with a metacritic score of 85 or more.
    Featured,
    /// Top rated games of one genre.
    Genre { id: u32 },
    Search { text: String },
    Genres {
        #[structopt(long, default_value = "20")]
        page_size: u32,
    },
    /// Check a build against a game's estimated requirements.
    Compat(compat::SubCommand),
}

run_impl!(Query, self, ctx, ser, {
    use rigcheck::modules::rawg::{GameList, GameQuery, GenreList};

    let key = ctx.rawg_key()?;
    match self {
        Self::Featured => {
            erased_serde::serialize(
                &GameList::get(&ctx.client, key, &GameQuery::featured()).await?,
                ser,
            )?;
        }
        Self::Genre { id } => {
            erased_serde::serialize(
                &GameList::get(&ctx.client, key, &GameQuery::by_genre(*id)).await?,
                ser,
            )?;
        }
        Self::Search { text } => {
            erased_serde::serialize(
                &GameList::get(&ctx.client, key, &GameQuery::search(text)).await?,
                ser,
            )?;
        }
        Self::Genres { page_size } => {
            erased_serde::serialize(&GenreList::get(&ctx.client, key, *page_size).await?, ser)?;
        }
        Self::Compat(c) => c.run(ctx, ser).await?,
    }
});

mod compat {
    use anyhow::Context as _;
    use rigcheck::{
        chrono::{Datelike, Utc},
        modules::rawg::Game,
        rigcheck_core::{GameProfile, PcSpecs},
    };
    use structopt::StructOpt;

    use crate::{modules::analyze::Specs, run_impl};

    #[derive(StructOpt)]
    pub(super) struct SubCommand {
        game_id: u64,
        #[structopt(flatten)]
        specs: Specs,
    }

    run_impl!(SubCommand, self, ctx, ser, {
        let game = Game::by_id(&ctx.client, ctx.rawg_key()?, self.game_id)
            .await?
            .with_context(|| format!("no game with id {}", self.game_id))?;
        let report = ctx.engine.check_compatibility(
            &GameProfile::from(&game),
            &PcSpecs::from(&self.specs),
            Utc::now().year(),
        )?;
        erased_serde::serialize(&report, ser)?;
    });
}
