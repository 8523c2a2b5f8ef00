// src/specs/base_skills.rs
//! Base (RIIC) skills: joins the building table's character → buff links,
//! the building table's buff metadata, the English riic table and the
//! room display-name table.

use crate::config::resources::Resources;
use crate::gamedata::{BuffRef, BuildingData, RiicTable, display_value};

pub const TITLE: &str = "Base Skills";
pub const JSON_FAILED: &str = "Base Skills: base skill JSONs failed to load!";
pub const NOT_FOUND: &str = "Base Skills: could not find matching base skill(s)!";

fn format_buff(
    buff: &BuffRef,
    building: &BuildingData,
    riic: &RiicTable,
    resources: &Resources,
) -> Vec<String> {
    let (Some(en), Some(zh)) = (riic.get(&buff.buff_id), building.buffs.get(&buff.buff_id)) else {
        return vec![format!("Could not locate base skill {}!", buff.buff_id)];
    };

    vec![
        format!(
            "{}  Lvl: {}  ({})  Room Type:  {}  E{}",
            en.name,
            display_value(&buff.cond.level),
            zh.buff_name,
            resources.room_name(&zh.room_type),
            buff.cond.phase_label(),
        ),
        join!(" ", &en.desc),
        s!(),
    ]
}

/// A single failure line when either table is missing or the operator has
/// no entry; otherwise the title followed by a header, the raw description
/// and a blank line per buff.
pub fn format_base_skills(
    operator_key: &str,
    building: Option<&BuildingData>,
    riic: Option<&RiicTable>,
    resources: &Resources,
) -> Vec<String> {
    let (Some(building), Some(riic)) = (building, riic) else {
        return vec![s!(JSON_FAILED)];
    };
    let Some(chr) = building.chars.get(operator_key) else {
        return vec![s!(NOT_FOUND)];
    };

    let mut lines = vec![s!(TITLE)];
    for group in chr.buff_char.iter().filter(|g| !g.buff_data.is_empty()) {
        for buff in &group.buff_data {
            lines.extend(format_buff(buff, building, riic, resources));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tables() -> (BuildingData, RiicTable, Resources) {
        let building: BuildingData = serde_json::from_value(json!({
            "chars": {
                "char_103_angel": { "charId": "char_103_angel", "buffChar": [
                    { "buffData": [
                        { "buffId": "trade_ord_spd[000]", "cond": { "phase": 0, "level": 1 } }
                    ]},
                    { "buffData": [] },
                    { "buffData": [
                        { "buffId": "trade_ord_spd[010]", "cond": { "phase": "PHASE_2", "level": 1 } }
                    ]}
                ]}
            },
            "buffs": {
                "trade_ord_spd[000]": { "buffName": "物流专家", "roomType": "TRADING" },
                "trade_ord_spd[010]": { "buffName": "企鹅物流", "roomType": "TRADING" }
            }
        }))
        .unwrap();

        let riic: RiicTable = serde_json::from_value(json!({
            "trade_ord_spd[000]": { "name": "Logistics Expert", "desc": "When assigned to the <Trading Post>, order efficiency +20%" },
            "trade_ord_spd[010]": { "name": "Penguin Logistics", "desc": "order efficiency +35%" }
        }))
        .unwrap();

        let mut resources = Resources::default();
        resources.rooms.insert(s!("trading"), s!("Trading Post"));
        (building, riic, resources)
    }

    #[test]
    fn joins_all_tables_in_order() {
        let (building, riic, res) = tables();
        let lines = format_base_skills("char_103_angel", Some(&building), Some(&riic), &res);
        assert_eq!(lines, vec![
            TITLE,
            "Logistics Expert  Lvl: 1  (物流专家)  Room Type:  Trading Post  E0",
            " When assigned to the <Trading Post>, order efficiency +20%",
            "",
            "Penguin Logistics  Lvl: 1  (企鹅物流)  Room Type:  Trading Post  E2",
            " order efficiency +35%",
            "",
        ]);
    }

    #[test]
    fn load_failure_and_missing_key_are_distinct() {
        let (building, riic, res) = tables();

        let failed = format_base_skills("char_103_angel", None, Some(&riic), &res);
        let failed_riic = format_base_skills("char_103_angel", Some(&building), None, &res);
        let missing = format_base_skills("char_999_nobody", Some(&building), Some(&riic), &res);

        assert_eq!(failed, vec![JSON_FAILED]);
        assert_eq!(failed_riic, vec![JSON_FAILED]);
        assert_eq!(missing, vec![NOT_FOUND]);
        assert_ne!(failed, missing);
    }

    #[test]
    fn unknown_buff_is_reported_inline() {
        let (mut building, riic, res) = tables();
        building.buffs.remove("trade_ord_spd[010]");
        let lines = format_base_skills("char_103_angel", Some(&building), Some(&riic), &res);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4], "Could not locate base skill trade_ord_spd[010]!");
    }
}
