use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use reqwest::RequestBuilder;
use rigcheck_core::GameProfile;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError};
use tracing::{debug, info};

use crate::common::Client;

pub const API_BASE: &str = "https://api.rawg.io/api";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: u32,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub games_count: Option<u32>,
    #[serde(default)]
    pub image_background: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Platform {
    pub id: u32,
    pub name: String,
    pub slug: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PlatformEntry {
    pub platform: Platform,
}

#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Game {
    pub id: u64,
    pub slug: String,
    pub name: String,
    /// RAWG sends `null` for unreleased titles and occasionally a partial date.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub released: Option<NaiveDate>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub playtime: Option<u32>,
    #[serde(default)]
    pub metacritic: Option<u32>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub platforms: Vec<PlatformEntry>,
}

impl Game {
    pub async fn by_id(client: &Client<false>, key: &str, id: u64) -> anyhow::Result<Option<Self>> {
        let res = request(client, key, &format!("games/{}", id)).send().await?;
        if res.status() == 404 {
            debug!(id, "game not found");
            Ok(None)
        } else {
            let game = res
                .error_for_status()
                .with_context(|| format!("fetching game {}", id))?
                .json()
                .await?;
            Ok(Some(game))
        }
    }

    pub fn release_year(&self) -> Option<i32> {
        self.released.map(|date| date.year())
    }
}

impl From<&Game> for GameProfile {
    fn from(game: &Game) -> Self {
        Self {
            name: game.name.clone(),
            rating: game.rating,
            release_year: game.release_year(),
            playtime: game.playtime,
        }
    }
}

/// Query string of `GET /games`. Unset fields are left off the URL.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct GameQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<u32>,
    /// A `min,max` range, e.g. `85,100`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metacritic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl GameQuery {
    /// The five best rated games with a metacritic score of 85 or more.
    pub fn featured() -> Self {
        Self {
            page_size: Some(5),
            ordering: Some("-rating".to_string()),
            metacritic: Some("85,100".to_string()),
            ..Self::default()
        }
    }

    pub fn by_genre(genre: u32) -> Self {
        Self {
            page_size: Some(15),
            ordering: Some("-rating".to_string()),
            genres: Some(genre),
            ..Self::default()
        }
    }

    pub fn search(text: &str) -> Self {
        Self {
            search: Some(text.to_string()),
            ..Self::default()
        }
    }
}

/// One page of a RAWG listing.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<T>,
}

pub type GameList = Page<Game>;
pub type GenreList = Page<Genre>;

impl GameList {
    pub async fn get(client: &Client<false>, key: &str, query: &GameQuery) -> anyhow::Result<Self> {
        let list: Self = request(client, key, "games")
            .query(query)
            .send()
            .await?
            .error_for_status()
            .context("listing games")?
            .json()
            .await?;
        info!(count = list.count, returned = list.results.len(), "listed games");
        Ok(list)
    }
}

impl GenreList {
    pub async fn get(client: &Client<false>, key: &str, page_size: u32) -> anyhow::Result<Self> {
        let list: Self = request(client, key, "genres")
            .query(&[("page_size", page_size)])
            .send()
            .await?
            .error_for_status()
            .context("listing genres")?
            .json()
            .await?;
        info!(returned = list.results.len(), "listed genres");
        Ok(list)
    }
}

fn request(client: &Client<false>, key: &str, path: &str) -> RequestBuilder {
    client
        .0
        .get(format!("{}/{}", API_BASE, path))
        .query(&[("key", key)])
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rigcheck_core::GameProfile;

    use super::{request, Game, GameList, GameQuery, GenreList};
    use crate::common::Client;

    const GAMES: &str = r#"{
        "count": 2,
        "next": "https://api.rawg.io/api/games?page=2",
        "results": [
            {
                "id": 3328,
                "slug": "the-witcher-3-wild-hunt",
                "name": "The Witcher 3: Wild Hunt",
                "released": "2015-05-18",
                "rating": 4.65,
                "playtime": 46,
                "metacritic": 92,
                "background_image": "https://media.rawg.io/media/games/618/witcher3.jpg",
                "genres": [ { "id": 4, "name": "Action", "slug": "action" } ],
                "platforms": [ { "platform": { "id": 4, "name": "PC", "slug": "pc" } } ]
            },
            {
                "id": 58175,
                "slug": "god-of-war-2",
                "name": "God of War",
                "released": null,
                "rating": 4.57,
                "playtime": 0,
                "metacritic": null,
                "genres": [],
                "platforms": null
            }
        ]
    }"#;

    #[test]
    fn test_game_list() {
        let list: GameList = serde_json::from_str(GAMES).unwrap();
        assert_eq!(list.count, 2);
        assert!(list.next.is_some());

        let witcher = &list.results[0];
        assert_eq!(witcher.released, NaiveDate::from_ymd_opt(2015, 5, 18));
        assert_eq!(witcher.release_year(), Some(2015));
        assert_eq!(witcher.genres[0].slug, "action");
        assert_eq!(witcher.platforms[0].platform.name, "PC");

        let gow = &list.results[1];
        assert_eq!(gow.released, None);
        assert_eq!(gow.metacritic, None);
        assert!(gow.platforms.is_empty());
    }

    #[test]
    fn test_genre_list() {
        let list: GenreList = serde_json::from_str(
            r#"{ "count": 19, "next": null, "results": [
                { "id": 4, "name": "Action", "slug": "action", "games_count": 180000,
                  "image_background": "https://media.rawg.io/media/games/action.jpg" }
            ] }"#,
        )
        .unwrap();
        assert_eq!(list.count, 19);
        assert_eq!(list.results[0].games_count, Some(180000));
    }

    #[test]
    fn test_game_profile() {
        let list: GameList = serde_json::from_str(GAMES).unwrap();
        let profile = GameProfile::from(&list.results[0]);
        assert_eq!(profile.name, "The Witcher 3: Wild Hunt");
        assert_eq!(profile.release_year, Some(2015));
        assert_eq!(profile.playtime, Some(46));

        let unreleased: Game = list.results[1].clone();
        assert_eq!(GameProfile::from(&unreleased).release_year, None);
    }

    #[test]
    fn test_urls() {
        let client = Client::<false>::default();
        let featured = request(&client, "abc", "games")
            .query(&GameQuery::featured())
            .build()
            .unwrap();
        assert_eq!(
            featured.url().as_str(),
            "https://api.rawg.io/api/games?key=abc&page_size=5&ordering=-rating&metacritic=85%2C100"
        );

        let genre = request(&client, "abc", "games")
            .query(&GameQuery::by_genre(4))
            .build()
            .unwrap();
        assert_eq!(
            genre.url().query(),
            Some("key=abc&page_size=15&ordering=-rating&genres=4")
        );

        let search = request(&client, "abc", "games")
            .query(&GameQuery::search("elden ring"))
            .build()
            .unwrap();
        assert_eq!(search.url().query(), Some("key=abc&search=elden+ring"));
    }
}
