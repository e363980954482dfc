use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppState, Phase};

fn item(key: &'static str, desc: &'static str) -> FooterItem {
    FooterItem {
        key,
        desc,
        highlighted: false,
    }
}

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    match state.phase() {
        Phase::Idle => {
            let mut search = vec![item("type", "search"), item("click", "show all")];
            if !state.selection.is_empty() {
                search.push(item("⌫⌫", "remove last"));
            }
            vec![
                FooterGroup {
                    name: "SEARCH",
                    items: search,
                },
                FooterGroup {
                    name: "APP",
                    items: vec![item("Esc", "quit")],
                },
            ]
        }
        Phase::Typing => vec![
            FooterGroup {
                name: "NAV",
                items: vec![item("↑/↓", "move"), item("Enter", "select")],
            },
            FooterGroup {
                name: "APP",
                items: vec![item("Esc", "close")],
            },
        ],
        Phase::ChipArmed => vec![FooterGroup {
            name: "CHIP",
            items: vec![
                FooterItem {
                    key: "⌫",
                    desc: "remove",
                    highlighted: true,
                },
                item("any key", "keep"),
            ],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ChipFocus;
    use crate::domain::models::Item;

    fn keys(groups: &[FooterGroup]) -> Vec<&'static str> {
        groups
            .iter()
            .flat_map(|g| g.items.iter().map(|i| i.key))
            .collect()
    }

    #[test]
    fn test_groups_follow_phase() {
        let mut state = AppState::with_catalog(vec![Item::new(1, "Alice", "a@x")]);
        assert!(!keys(&get_groups(&state)).contains(&"⌫⌫"));

        state.selection.add(Item::new(1, "Alice", "a@x"));
        assert!(keys(&get_groups(&state)).contains(&"⌫⌫"));

        state.suggestions.visible = true;
        assert!(keys(&get_groups(&state)).contains(&"Enter"));

        state.chip_focus = ChipFocus::Armed(0);
        let groups = get_groups(&state);
        assert_eq!(groups[0].name, "CHIP");
        assert!(groups[0].items[0].highlighted);
    }
}
