//! Cached roster of Corpus Christi campers

use common::{cache::RedisPool, error::DatabaseResult};
use tracing::{debug, warn};

use crate::{
    models::intake::{CorpusChristiEntry, RosterEntry},
    repositories::IntakeRepository,
};

/// Redis key holding the serialized registrations
pub const ROSTER_CACHE_KEY: &str = "acampa:corpus-christi-2025:campistas";

/// A numbered roster and where it came from
#[derive(Debug)]
pub struct Roster {
    pub campistas: Vec<RosterEntry>,
    pub ativos: usize,
    pub from_cache: bool,
}

/// Number active entries 1, 2, … in the order given; inactive ones get none
pub fn number_active(entries: Vec<CorpusChristiEntry>) -> Vec<RosterEntry> {
    let mut next = 0;
    entries
        .into_iter()
        .map(|campista| {
            let numero_inscricao = campista.ativo.then(|| {
                next += 1;
                next
            });
            RosterEntry {
                campista,
                numero_inscricao,
            }
        })
        .collect()
}

/// Read-through cache over the registrations table
#[derive(Clone)]
pub struct RosterCache {
    redis: RedisPool,
    ttl_secs: u64,
}

impl RosterCache {
    pub fn new(redis: RedisPool, ttl_secs: u64) -> Self {
        Self { redis, ttl_secs }
    }

    /// Load the roster, from Redis unless `refresh` is set or the key is cold
    ///
    /// Redis failures degrade to a database read.
    pub async fn load(&self, intake: &IntakeRepository, refresh: bool) -> DatabaseResult<Roster> {
        if !refresh {
            match self
                .redis
                .get_json::<Vec<CorpusChristiEntry>>(ROSTER_CACHE_KEY)
                .await
            {
                Ok(Some(entries)) => {
                    debug!(count = entries.len(), "Roster served from cache");
                    return Ok(Self::numbered(entries, true));
                }
                Ok(None) => {}
                Err(err) => warn!("Roster cache read failed: {:#}", err),
            }
        }

        let entries = intake.list_corpus_christi().await?;

        if let Err(err) = self
            .redis
            .set_json(ROSTER_CACHE_KEY, &entries, self.ttl_secs)
            .await
        {
            warn!("Roster cache write failed: {:#}", err);
        }

        Ok(Self::numbered(entries, false))
    }

    fn numbered(entries: Vec<CorpusChristiEntry>, from_cache: bool) -> Roster {
        let campistas = number_active(entries);
        let ativos = campistas
            .iter()
            .filter(|entry| entry.numero_inscricao.is_some())
            .count();

        Roster {
            campistas,
            ativos,
            from_cache,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::intake::fixtures::corpus_christi_entry;
    use chrono::{Duration, Utc};

    #[test]
    fn test_only_active_entries_are_numbered() {
        let start = Utc::now();
        let entries = vec![
            corpus_christi_entry(true, start),
            corpus_christi_entry(false, start + Duration::minutes(1)),
            corpus_christi_entry(true, start + Duration::minutes(2)),
            corpus_christi_entry(true, start + Duration::minutes(3)),
        ];

        let numbers: Vec<_> = number_active(entries)
            .iter()
            .map(|entry| entry.numero_inscricao)
            .collect();
        assert_eq!(numbers, vec![Some(1), None, Some(2), Some(3)]);
    }

    #[test]
    fn test_numbering_serializes_camel_case() {
        let roster = number_active(vec![
            corpus_christi_entry(false, Utc::now()),
            corpus_christi_entry(true, Utc::now()),
        ]);

        let json = serde_json::to_value(&roster).unwrap();
        assert!(json[0].get("numeroInscricao").is_none());
        assert_eq!(json[1]["numeroInscricao"], 1);
        assert_eq!(json[1]["ativo"], true);
        assert_eq!(json[1]["nome"], "Clara Dias");
    }

    #[test]
    fn test_roster_counts_active() {
        let roster = RosterCache::numbered(
            vec![
                corpus_christi_entry(true, Utc::now()),
                corpus_christi_entry(false, Utc::now()),
            ],
            true,
        );
        assert_eq!(roster.ativos, 1);
        assert!(roster.from_cache);
    }
}
