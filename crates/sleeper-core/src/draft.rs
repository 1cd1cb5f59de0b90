// Draft recap: picks in draft order with team and player resolved.

use serde::Serialize;

use crate::snapshot::{strip_control, DraftPick, LeagueSnapshot, UNKNOWN_CODE};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftRecapEntry {
    pub round: u32,
    pub pick_no: u32,
    pub team: String,
    pub player: String,
    pub position: String,
}

/// Player name from the pick's own metadata, falling back to the directory.
fn pick_player(snapshot: &LeagueSnapshot, pick: &DraftPick) -> (String, String) {
    let meta = pick.metadata.as_ref();
    let name = meta
        .map(|m| {
            format!(
                "{} {}",
                m.first_name.as_deref().unwrap_or(""),
                m.last_name.as_deref().unwrap_or("")
            )
            .trim()
            .to_string()
        })
        .map(|n| strip_control(&n).into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| snapshot.player_name(&pick.player_id));
    let position = meta
        .and_then(|m| m.position.clone())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| snapshot.player_position_team(&pick.player_id).0.to_string());
    (name, position)
}

pub fn draft_recap(snapshot: &LeagueSnapshot) -> Vec<DraftRecapEntry> {
    let mut picks: Vec<&DraftPick> = snapshot.draft_picks.iter().collect();
    picks.sort_by_key(|p| p.pick_no);

    picks
        .into_iter()
        .map(|pick| {
            let (player, position) = pick_player(snapshot, pick);
            DraftRecapEntry {
                round: pick.round,
                pick_no: pick.pick_no,
                team: pick
                    .roster_id
                    .map(|id| snapshot.team_name(id))
                    .unwrap_or_else(|| UNKNOWN_CODE.to_string()),
                player,
                position,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{DraftPickMetadata, LeagueInfo, Player};
    use std::collections::HashMap;

    #[test]
    fn picks_are_ordered_and_resolved() {
        let mut players = HashMap::new();
        players.insert(
            "6794".to_string(),
            Player {
                first_name: Some("Justin".into()),
                last_name: Some("Jefferson".into()),
                position: Some("WR".into()),
                team: Some("MIN".into()),
            },
        );
        let snap = LeagueSnapshot::builder(LeagueInfo::default())
            .players(players)
            .draft_picks(vec![
                DraftPick {
                    round: 1,
                    pick_no: 2,
                    roster_id: Some(4),
                    player_id: "6794".into(),
                    metadata: None,
                },
                DraftPick {
                    round: 1,
                    pick_no: 1,
                    roster_id: Some(3),
                    player_id: "4034".into(),
                    metadata: Some(DraftPickMetadata {
                        first_name: Some("Christian".into()),
                        last_name: Some("McCaffrey".into()),
                        position: Some("RB".into()),
                        team: Some("SF".into()),
                    }),
                },
            ])
            .build();

        let recap = draft_recap(&snap);
        assert_eq!(recap.len(), 2);
        assert_eq!(recap[0].pick_no, 1);
        assert_eq!(recap[0].player, "Christian McCaffrey");
        assert_eq!(recap[0].position, "RB");
        assert_eq!(recap[0].team, "Team 3");
        assert_eq!(recap[1].player, "Justin Jefferson");
        assert_eq!(recap[1].position, "WR");
    }

    #[test]
    fn no_draft_no_recap() {
        let snap = LeagueSnapshot::builder(LeagueInfo::default()).build();
        assert!(draft_recap(&snap).is_empty());
    }
}
