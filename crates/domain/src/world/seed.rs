//! Seeded wasteland: locations, ledger coordinates, starting kit.

use crate::entities::{InventoryItem, ItemCategory, LocationNode};
use crate::error::DomainError;
use crate::value_objects::{Coordinate, Direction, LocationKey, Vitals};

/// Key of the location every new game starts in
pub const START_LOCATION: &str = "wasteland_start";

fn key(raw: &str) -> Result<LocationKey, DomainError> {
    LocationKey::new(raw)
}

fn node(
    raw_key: &str,
    name: &str,
    description: &str,
    exits: &[(Direction, &str)],
    landmarks: &[&str],
) -> Result<LocationNode, DomainError> {
    let mut node = LocationNode::new(key(raw_key)?, name, description)
        .with_landmarks(landmarks.iter().copied());
    for (direction, destination) in exits {
        node = node.with_exit(*direction, key(destination)?);
    }
    Ok(node)
}

/// All seeded locations in declaration order.
///
/// # Errors
///
/// Only fails if a hard-coded key is not a valid `LocationKey`.
pub fn seed_locations() -> Result<Vec<LocationNode>, DomainError> {
    use Direction::{East, North, South, West};

    Ok(vec![
        node(
            "wasteland_start",
            "The Wasteland - Ground Zero",
            "You stand in the middle of an endless expanse of cracked earth and ash. The sky above is a sickly gray, thick with dust that blots out any hint of sun. The air tastes metallic, bitter. There are no trees, no grass, no sign of life—just endless desolation stretching in every direction.\n\nA skeletal remnant of what might have been a road lies to the north, partially buried under drifts of fine, colorless sand. To the east, you can make out the rusted silhouette of something tall—perhaps an old radio tower or the bones of a building. South, the ground dips into what looks like a dried riverbed, littered with debris. West is more of the same: nothing but barren, cracked earth fading into the haze.\n\nYou clutch a tattered map in your hand—your only guide in this dead world. You are utterly alone.",
            &[
                (North, "old_road"),
                (East, "rusted_tower"),
                (South, "dry_riverbed"),
                (West, "ash_plains"),
            ],
            &[
                "cracked earth",
                "skeletal road (north)",
                "rusted structure (east)",
                "dried riverbed (south)",
                "ash plains (west)",
            ],
        )?,
        node(
            "old_road",
            "The Old Road",
            "What remains of an ancient highway stretches before you—buckled asphalt riddled with deep cracks, weeds long dead and fossilized in the fissures. Rusted car husks sit abandoned, their windows shattered, their frames stripped bare by time and scavengers.\n\nThe road runs east and west, both directions vanishing into the gray distance. To the south, you can return to the wasteland's heart. The silence here is oppressive; even the wind seems reluctant to disturb this graveyard of the old world.",
            &[
                (South, "wasteland_start"),
                (East, "highway_junction"),
                (West, "collapsed_overpass"),
            ],
            &[
                "buckled asphalt",
                "rusted car husks",
                "highway (east/west)",
                "wasteland (south)",
            ],
        )?,
        node(
            "rusted_tower",
            "The Rusted Tower",
            "A skeletal radio tower looms above you, its metal frame corroded and twisted. It leans precariously, as if one strong gust could topple it entirely. At its base, scattered debris—broken glass, twisted metal, scraps of unidentifiable cloth—litters the ground.\n\nThe tower groans softly in the wind, a mournful sound. From here, you can see west back to the wasteland, or venture north where the ground slopes upward toward a rocky outcrop.",
            &[(West, "wasteland_start"), (North, "rocky_outcrop")],
            &[
                "corroded radio tower",
                "scattered debris",
                "wasteland (west)",
                "rocky terrain (north)",
            ],
        )?,
        node(
            "dry_riverbed",
            "The Dry Riverbed",
            "You stand in what was once a river, now a cracked channel of sun-baked mud and jagged stones. The bed is littered with the detritus of a lost civilization: rusted shopping carts, waterlogged books turned to pulp and dust, plastic bottles bleached white by the harsh sun.\n\nThe riverbed stretches east and west. To the north lies the wasteland you came from. Occasionally, you see the faint outline of old bridges in the distance, their spans long collapsed.",
            &[
                (North, "wasteland_start"),
                (East, "bridge_ruins"),
                (West, "mudflats"),
            ],
            &[
                "cracked mud channel",
                "scattered debris",
                "collapsed bridges (distance)",
                "wasteland (north)",
            ],
        )?,
        node(
            "ash_plains",
            "The Ash Plains",
            "An endless plain of fine ash stretches before you, disturbed only by your footprints. Each step sends up tiny clouds of gray dust that hang in the still air. The silence here is absolute—no wind, no sound, just the soft crunch of ash beneath your feet.\n\nFar to the west, you think you can make out the vague shape of hills or dunes. To the east lies the wasteland's heart. The monotony of this place is suffocating.",
            &[(East, "wasteland_start"), (West, "ash_dunes")],
            &[
                "endless ash",
                "footprints",
                "distant hills (west)",
                "wasteland (east)",
            ],
        )?,
        node(
            "highway_junction",
            "Highway Junction",
            "Several roads converge here in a tangle of cracked concrete and faded lane markings. A rusted sign, barely legible, points in four directions—though the destinations it once indicated are long forgotten.\n\nAbandoned vehicles form a maze of metal, some stacked atop others as if pushed by some great force. The junction continues west along the old road, or you can venture south into the wasteland.",
            &[(West, "old_road"), (South, "wasteland_start")],
            &[
                "cracked concrete",
                "rusted directional sign",
                "vehicle maze",
                "old road (west)",
            ],
        )?,
        node(
            "collapsed_overpass",
            "Collapsed Overpass",
            "A massive concrete overpass has collapsed into a pile of rubble, blocking what was once a major thoroughfare. Rebar juts out at odd angles, and sections of roadway lie cracked and tilted like broken teeth.\n\nYou can climb over the rubble to continue west, return east along the old road, or explore south into the wasteland.",
            &[
                (East, "old_road"),
                (South, "wasteland_start"),
                (West, "rubble_field"),
            ],
            &[
                "collapsed concrete",
                "jutting rebar",
                "rubble pile",
                "old road (east)",
            ],
        )?,
        node(
            "rocky_outcrop",
            "Rocky Outcrop",
            "You've climbed to a rocky outcrop overlooking the wasteland. From here, the devastation is laid bare—kilometer after kilometer of dead land stretching to the horizon. The view is both terrible and humbling.\n\nA small cave entrance yawns in the rock face to the north. South leads back down to the rusted tower.",
            &[(South, "rusted_tower"), (North, "cave_entrance")],
            &[
                "rocky overlook",
                "cave entrance (north)",
                "panoramic wasteland view",
                "tower (south)",
            ],
        )?,
        node(
            "bridge_ruins",
            "Bridge Ruins",
            "The skeletal remains of a bridge arch over the dry riverbed. Most of the span has collapsed, leaving only twisted girders and crumbling concrete pillars. You can carefully cross the remaining structure to reach the far side, or return west.",
            &[(West, "dry_riverbed")],
            &[
                "collapsed bridge span",
                "twisted girders",
                "concrete pillars",
                "riverbed (west)",
            ],
        )?,
        node(
            "mudflats",
            "The Mudflats",
            "The riverbed opens into a wide expanse of cracked, dried mud—once a lake or reservoir, now nothing but a hardpan floor. Strange patterns in the mud suggest the last moments of water evaporating long ago.",
            &[(East, "dry_riverbed")],
            &[
                "cracked mudflats",
                "evaporation patterns",
                "dry lakebed",
                "riverbed (east)",
            ],
        )?,
        node(
            "ash_dunes",
            "Ash Dunes",
            "The ash has piled into dunes here, sculpted by winds you cannot feel. The dunes shift subtly, and walking through them is exhausting. To the east lies the ash plains. The dunes seem to go on forever to the west.",
            &[(East, "ash_plains")],
            &["shifting ash dunes", "endless gray", "plains (east)"],
        )?,
        node(
            "rubble_field",
            "Rubble Field",
            "A vast field of broken concrete, twisted metal, and shattered glass stretches before you. This was once a city, now reduced to unrecognizable fragments. Scavenging here might yield something useful—or nothing but more despair.",
            &[(East, "collapsed_overpass")],
            &[
                "broken concrete",
                "twisted metal",
                "shattered glass",
                "overpass (east)",
            ],
        )?,
        node(
            "cave_entrance",
            "Cave Entrance",
            "A dark cave opens before you, offering shelter from the harsh wasteland. The darkness within is absolute—entering without light would be foolish. South returns you to the rocky outcrop.",
            &[(South, "rocky_outcrop")],
            &["dark cave mouth", "shelter", "outcrop (south)"],
        )?,
    ])
}

/// Ledger grid position of every seeded location.
///
/// # Errors
///
/// Only fails if a hard-coded key is not a valid `LocationKey`.
pub fn seed_coordinates() -> Result<Vec<(LocationKey, Coordinate)>, DomainError> {
    [
        ("wasteland_start", 0, 0),
        ("old_road", 0, 5),
        ("rusted_tower", 10, 0),
        ("dry_riverbed", 0, 10),
        ("ash_plains", 5, 0),
        ("rocky_outcrop", 10, 15),
        ("cave_entrance", 10, 20),
        ("highway_junction", 5, 5),
        ("collapsed_overpass", 0, 8),
        ("bridge_ruins", 5, 10),
        ("mudflats", 0, 12),
        ("ash_dunes", 8, 0),
        ("rubble_field", 0, 15),
    ]
    .into_iter()
    .map(|(raw, x, y)| Ok((key(raw)?, Coordinate::new(x, y))))
    .collect()
}

/// Items every new survivor carries
pub fn starting_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new(
            "tattered_map",
            "Tattered Map",
            "A worn, barely legible map showing vague landmarks of the wasteland. Your only guide.",
            ItemCategory::Tool,
        ),
        InventoryItem::new(
            "stale_ration",
            "Stale Ration Bar",
            "A military ration bar, years past its expiration date. Still edible, barely.",
            ItemCategory::Ration,
        ),
        InventoryItem::new(
            "dirty_water",
            "Bottle of Dirty Water",
            "Water of questionable quality. Drinking it is risky, but thirst is worse.",
            ItemCategory::SpoiledRation,
        ),
    ]
}

pub fn initial_vitals() -> Vitals {
    Vitals::new(50, 75, 60)
}
