use crate::core::{svtype::SvType, tool::Tool};
use std::{collections::BTreeMap, fmt};

/// How a qualifying call contributes to its event's matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    /// The call's signed size
    Size,
    /// Constant 1, marks presence only
    Presence,
}

/// A (SV type, tool) combination that is clustered into events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterRule {
    pub sv_type: SvType,
    pub tool: Tool,
    pub magnitude: Magnitude,
}

impl ClusterRule {
    pub fn matches(&self, sv_type: &SvType, tool: &Tool) -> bool {
        self.sv_type == *sv_type && self.tool == *tool
    }
}

/// Column identity of an event in the distance matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventKey {
    pub sv_type: SvType,
    pub anchor: i64,
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.sv_type, self.anchor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    /// Row index of the sample in the sample registry
    pub sample: usize,
    pub magnitude: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub anchor: i64,
    pub members: Vec<Member>,
}

/// Events of a single SV type, in creation order.
///
/// A call joins the earliest-created event whose anchor lies strictly within `window`
/// of the call position; anchors never move. Candidates are looked up in a sorted
/// anchor index, and the lowest creation index among them wins, so the result is the
/// same as scanning the events in creation order.
#[derive(Debug, Clone)]
pub struct EventSet {
    pub sv_type: SvType,
    window: i64,
    events: Vec<Event>,
    anchor_index: BTreeMap<i64, usize>,
}

impl EventSet {
    pub fn new(sv_type: SvType, window: i64) -> Self {
        debug_assert!(window >= 1, "window must be positive");
        Self {
            sv_type,
            window,
            events: Vec::new(),
            anchor_index: BTreeMap::new(),
        }
    }

    /// Adds a call and returns the index of the event it was assigned to.
    pub fn add(&mut self, sample: usize, pos: i64, magnitude: i64) -> usize {
        let member = Member { sample, magnitude };
        // lo <= pos <= hi holds even when the bounds saturate
        let reach = self.window.saturating_sub(1).max(0);
        let lo = pos.saturating_sub(reach);
        let hi = pos.saturating_add(reach);
        let first_fit = self
            .anchor_index
            .range(lo..=hi)
            .map(|(_, &event_idx)| event_idx)
            .min();

        match first_fit {
            Some(event_idx) => {
                self.events[event_idx].members.push(member);
                event_idx
            }
            None => {
                let event_idx = self.events.len();
                self.events.push(Event {
                    anchor: pos,
                    members: vec![member],
                });
                self.anchor_index.insert(pos, event_idx);
                event_idx
            }
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = EventKey> + '_ {
        self.events.iter().map(|event| EventKey {
            sv_type: self.sv_type.clone(),
            anchor: event.anchor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors(set: &EventSet) -> Vec<i64> {
        set.events().iter().map(|e| e.anchor).collect()
    }

    #[test]
    fn test_first_call_creates_anchor() {
        let mut set = EventSet::new(SvType::DELETION, 50);
        assert!(set.is_empty());
        assert_eq!(set.add(0, 1000, 200), 0);
        assert_eq!(anchors(&set), vec![1000]);
        assert_eq!(
            set.events()[0].members,
            vec![Member {
                sample: 0,
                magnitude: 200
            }]
        );
    }

    #[test]
    fn test_calls_within_window_merge() {
        let mut set = EventSet::new(SvType::DELETION, 50);
        set.add(0, 1000, 200);
        assert_eq!(set.add(1, 1040, 210), 0);
        assert_eq!(set.len(), 1);
        assert_eq!(set.events()[0].members.len(), 2);
    }

    #[test]
    fn test_calls_outside_window_split() {
        let mut set = EventSet::new(SvType::DELETION, 50);
        set.add(0, 1000, 200);
        assert_eq!(set.add(1, 1060, 210), 1);
        assert_eq!(anchors(&set), vec![1000, 1060]);
    }

    #[test]
    fn test_window_bounds_are_exclusive() {
        let mut set = EventSet::new(SvType::DELETION, 50);
        set.add(0, 1000, 1);
        assert_eq!(set.add(0, 1049, 1), 0);
        assert_eq!(set.add(0, 951, 1), 0);
        assert_eq!(set.add(0, 1050, 1), 1);
        assert_eq!(set.add(0, 950, 1), 2);
        assert_eq!(anchors(&set), vec![1000, 1050, 950]);
    }

    #[test]
    fn test_anchor_is_not_recentered() {
        let mut set = EventSet::new(SvType::DELETION, 50);
        set.add(0, 1000, 1);
        set.add(1, 1045, 1);
        // 1090 is within 50 of 1045 but not of the anchor at 1000
        assert_eq!(set.add(2, 1090, 1), 1);
        assert_eq!(anchors(&set), vec![1000, 1090]);
    }

    #[test]
    fn test_first_fit_prefers_earliest_anchor() {
        let mut set = EventSet::new(SvType::DELETION, 50);
        set.add(0, 1000, 1);
        set.add(0, 1080, 1);
        // 1045 is closer to 1080 but the anchor at 1000 was created first
        assert_eq!(set.add(1, 1045, 7), 0);
        assert_eq!(set.events()[0].members.len(), 2);
        assert_eq!(set.events()[1].members.len(), 1);
    }

    #[test]
    fn test_first_fit_uses_creation_order_not_position_order() {
        let mut set = EventSet::new(SvType::DUPLICATION, 50);
        set.add(0, 1080, 1);
        set.add(0, 1000, 1);
        // both windows contain 1040; 1080 was created first
        assert_eq!(set.add(1, 1040, 1), 0);
        assert_eq!(set.events()[0].anchor, 1080);
    }

    #[test]
    fn test_same_sample_members_are_kept() {
        let mut set = EventSet::new(SvType::DELETION, 50);
        set.add(3, 1000, 100);
        set.add(3, 1010, 120);
        assert_eq!(
            set.events()[0].members,
            vec![
                Member {
                    sample: 3,
                    magnitude: 100
                },
                Member {
                    sample: 3,
                    magnitude: 120
                }
            ]
        );
    }

    #[test]
    fn test_positions_at_integer_bounds() {
        let mut set = EventSet::new(SvType::DELETION, 1);
        assert_eq!(set.add(0, i64::MIN, 1), 0);
        assert_eq!(set.add(0, i64::MIN, 1), 0);
        assert_eq!(set.add(0, i64::MAX, 1), 1);
        assert_eq!(set.add(0, i64::MAX, 1), 1);

        let mut wide = EventSet::new(SvType::DELETION, i64::MAX);
        assert_eq!(wide.add(0, 0, 1), 0);
        assert_eq!(wide.add(0, i64::MAX - 1, 1), 0);
        assert_eq!(wide.add(0, i64::MAX, 1), 1);
        assert_eq!(wide.add(0, i64::MIN, 1), 2);
        assert_eq!(anchors(&wide), vec![0, i64::MAX, i64::MIN]);
    }

    #[test]
    fn test_keys_carry_sv_type() {
        let mut set = EventSet::new(SvType::INSERTION, 50);
        set.add(0, 5000, 1);
        set.add(0, 7000, 1);
        let keys: Vec<String> = set.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["INS:5000", "INS:7000"]);
    }

    #[test]
    fn test_rule_matches() {
        let rule = ClusterRule {
            sv_type: SvType::INSERTION,
            tool: Tool::Pindel,
            magnitude: Magnitude::Presence,
        };
        assert!(rule.matches(&SvType::INSERTION, &Tool::Pindel));
        assert!(!rule.matches(&SvType::INSERTION, &Tool::PindelQ));
        assert!(!rule.matches(&SvType::DELETION, &Tool::Pindel));
    }
}
