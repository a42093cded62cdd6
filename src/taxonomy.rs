//! Closed vocabularies written into the classification columns. Every value
//! the rules assign comes from one of these enums, so the pipeline's output
//! stays closed under its own vocabulary.

/// Source estimating tool a line item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Tally,
    OneClick,
}

impl Tool {
    /// Label written into the `Tool` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Tally => "TallyLCA",
            Tool::OneClick => "One Click LCA",
        }
    }

    /// Per-tool subdirectory name used by the stage directories.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Tool::Tally => "tally",
            Tool::OneClick => "oneclick",
        }
    }
}

/// Level-one building element category, written to `CLF Omni`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementCategory {
    Substructure,
    Superstructure,
    Enclosure,
    InteriorConstruction,
    InteriorFinishes,
    Mep,
    Ffe,
    Sitework,
    /// Sentinel for rows no rule claimed; valid data, not an error.
    Unknown,
}

impl ElementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementCategory::Substructure => "Substructure",
            ElementCategory::Superstructure => "Shell - Superstructure",
            ElementCategory::Enclosure => "Shell - Exterior Enclosure",
            ElementCategory::InteriorConstruction => "Interiors - Construction",
            ElementCategory::InteriorFinishes => "Interiors - Finishes",
            ElementCategory::Mep => "MEP",
            ElementCategory::Ffe => "FF&E",
            ElementCategory::Sitework => "Sitework",
            ElementCategory::Unknown => "Unknown",
        }
    }
}

/// Wall placement category carried in the Revit building element column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevitBuildingCategory {
    Enclosure,
    Interiors,
}

impl RevitBuildingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevitBuildingCategory::Enclosure => "Enclosure",
            RevitBuildingCategory::Interiors => "Interiors",
        }
    }
}

/// Material family written to `MQ_1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialQuantityOne {
    Concrete,
    Steel,
    Masonry,
    Aluminum,
    Wood,
    Glazing,
    Roof,
    Insulation,
    Gypsum,
    Fireproof,
    DoorFrame,
    WindowFrame,
    AcousticCeilings,
    SynthComp,
    Cladding,
    AdhesSeal,
    AirVapor,
    Coatings,
    Floor,
    OthMetals,
    WallCoverings,
    /// Sentinel for rows no family rule claimed.
    Other,
}

impl MaterialQuantityOne {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialQuantityOne::Concrete => "Concrete",
            MaterialQuantityOne::Steel => "Steel",
            MaterialQuantityOne::Masonry => "Masonry",
            MaterialQuantityOne::Aluminum => "Aluminum",
            MaterialQuantityOne::Wood => "Wood",
            MaterialQuantityOne::Glazing => "Glazing",
            MaterialQuantityOne::Roof => "Roofing",
            MaterialQuantityOne::Insulation => "Insulation",
            MaterialQuantityOne::Gypsum => "Gypsum",
            MaterialQuantityOne::Fireproof => "Fireproofing",
            MaterialQuantityOne::DoorFrame => "Doors and Frames",
            MaterialQuantityOne::WindowFrame => "Window Frames",
            MaterialQuantityOne::AcousticCeilings => "Acoustic Ceilings",
            MaterialQuantityOne::SynthComp => "Synthetic Composites",
            MaterialQuantityOne::Cladding => "Cladding",
            MaterialQuantityOne::AdhesSeal => "Adhesives and Sealants",
            MaterialQuantityOne::AirVapor => "Air and Vapor Barriers",
            MaterialQuantityOne::Coatings => "Coatings",
            MaterialQuantityOne::Floor => "Flooring and Tile",
            MaterialQuantityOne::OthMetals => "Other Metals",
            MaterialQuantityOne::WallCoverings => "Wall Coverings",
            MaterialQuantityOne::Other => "Other",
        }
    }
}

/// Material subtype written to `MQ_2`. The `...Other` members are the
/// family-qualified buckets the final renaming pass assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialQuantityTwo {
    // Concrete
    ReadyMixOther,
    ReadyMixLw3,
    ReadyMixLw4,
    ReadyMixLw5,
    ReadyMixNw25,
    ReadyMixNw3,
    ReadyMixNw4,
    ReadyMixNw5,
    ReadyMixNw6,
    ReadyMixNw8,
    Precast,
    Gfrc,
    // Steel
    HotRolled,
    Hss,
    SteelSheet,
    Plate,
    ColdFormed,
    Deck,
    Rebar,
    OpenWebJoists,
    // Masonry
    Cmu,
    Brick,
    Stone,
    Grout,
    // Aluminum
    Extrusion,
    AlumSheet,
    // Wood
    HeavyTimber,
    WoodFraming,
    Hardwood,
    Plywood,
    Osb,
    Mdf,
    Psl,
    Glt,
    Clt,
    Lsl,
    Lvl,
    WoodIJoist,
    // Glazing
    Igu,
    // Gypsum
    IntGypsum,
    GlassmatSheathing,
    // Insulation
    Xps,
    Pir,
    MinWoolLow,
    MinWoolHigh,
    FibBlanket,
    Cellulose,
    Eps,
    PolyFoam,
    // Roofing
    Bitumen,
    Bur,
    Tpo,
    Epdm,
    Pvc,
    Hdpe,
    AsphaltShingle,
    // Fireproofing
    Cementitious,
    Intumescent,
    // Doors and frames
    AlumDoor,
    AlumDoorFrame,
    WoodDoor,
    WoodDoorFrame,
    SteelDoor,
    SteelDoorFrame,
    AlumFramedGlassEnt,
    FibDoor,
    // Window frames
    AlumWindow,
    SteelWindow,
    VinylWindow,
    WoodWindow,
    FibWindow,
    CwMullion,
    // Acoustic ceilings
    AcousCeilFiber,
    AcousCeilAlum,
    AcousCeilSteel,
    SuspSys,
    // Cladding
    Acm,
    AlumMetalPanel,
    SteelMetalPanel,
    ArchFiberPanel,
    Imp,
    Terracotta,
    Stucco,
    GfrcPanel,
    Hpl,
    // Coatings
    Paint,
    // Flooring and tile; member spelling follows the established column data
    RaisedAcessFloor,
    Terrazzo,
    Carpet,
    ResFloorVinyl,
    ResFloorRubber,
    PorcelainTile,
    StoneTile,
    // Other metals
    Brass,
    Bronze,
    Copper,
    Titanium,
    Zinc,
    Fasteners,
    // Families that keep one catch-all subtype
    SynthComp,
    AdhesSeal,
    AirVapor,
    WallCoverings,
    // Family-qualified buckets for leftover `Other` rows
    ConcreteOther,
    SteelOther,
    MasonryOther,
    AlumOther,
    WoodOther,
    GlazingOther,
    InsulationOther,
    GypsumOther,
    RoofingOther,
    FireproofingOther,
    DoorOther,
    WindowOther,
    AcousCeilOther,
    CladdingOther,
    CoatingOther,
    FloorOther,
    OthMetalOther,
    /// Sentinel for rows no subtype rule claimed.
    Other,
}

impl MaterialQuantityTwo {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialQuantityTwo::ReadyMixOther => "Ready mix - other",
            MaterialQuantityTwo::ReadyMixLw3 => "Ready mix LW, 3000 psi",
            MaterialQuantityTwo::ReadyMixLw4 => "Ready mix LW, 4000 psi",
            MaterialQuantityTwo::ReadyMixLw5 => "Ready mix LW, 5000 psi",
            MaterialQuantityTwo::ReadyMixNw25 => "Ready mix NW, 2500 psi",
            MaterialQuantityTwo::ReadyMixNw3 => "Ready mix NW, 3000 psi",
            MaterialQuantityTwo::ReadyMixNw4 => "Ready mix NW, 4000 psi",
            MaterialQuantityTwo::ReadyMixNw5 => "Ready mix NW, 5000 psi",
            MaterialQuantityTwo::ReadyMixNw6 => "Ready mix NW, 6000 psi",
            MaterialQuantityTwo::ReadyMixNw8 => "Ready mix NW, 8000 psi",
            MaterialQuantityTwo::Precast => "Precast",
            MaterialQuantityTwo::Gfrc => "GFRC",
            MaterialQuantityTwo::HotRolled => "Hot-rolled",
            MaterialQuantityTwo::Hss => "HSS",
            MaterialQuantityTwo::SteelSheet => "Steel sheet",
            MaterialQuantityTwo::Plate => "Plate",
            MaterialQuantityTwo::ColdFormed => "Cold-formed",
            MaterialQuantityTwo::Deck => "Deck",
            MaterialQuantityTwo::Rebar => "Rebar",
            MaterialQuantityTwo::OpenWebJoists => "Open web joists",
            MaterialQuantityTwo::Cmu => "CMU",
            MaterialQuantityTwo::Brick => "Brick",
            MaterialQuantityTwo::Stone => "Stone",
            MaterialQuantityTwo::Grout => "Grout",
            MaterialQuantityTwo::Extrusion => "Extrusion",
            MaterialQuantityTwo::AlumSheet => "Aluminum sheet",
            MaterialQuantityTwo::HeavyTimber => "Heavy timber",
            MaterialQuantityTwo::WoodFraming => "Wood framing",
            MaterialQuantityTwo::Hardwood => "Hardwood",
            MaterialQuantityTwo::Plywood => "Plywood",
            MaterialQuantityTwo::Osb => "OSB",
            MaterialQuantityTwo::Mdf => "MDF",
            MaterialQuantityTwo::Psl => "PSL",
            MaterialQuantityTwo::Glt => "GLT",
            MaterialQuantityTwo::Clt => "CLT",
            MaterialQuantityTwo::Lsl => "LSL",
            MaterialQuantityTwo::Lvl => "LVL",
            MaterialQuantityTwo::WoodIJoist => "Wood I-joist",
            MaterialQuantityTwo::Igu => "IGU",
            MaterialQuantityTwo::IntGypsum => "Interior gypsum board",
            MaterialQuantityTwo::GlassmatSheathing => "Glass-mat sheathing",
            MaterialQuantityTwo::Xps => "XPS",
            MaterialQuantityTwo::Pir => "PIR",
            MaterialQuantityTwo::MinWoolLow => "Mineral wool, low density",
            MaterialQuantityTwo::MinWoolHigh => "Mineral wool, high density",
            MaterialQuantityTwo::FibBlanket => "Fiberglass blanket",
            MaterialQuantityTwo::Cellulose => "Cellulose",
            MaterialQuantityTwo::Eps => "EPS",
            MaterialQuantityTwo::PolyFoam => "Spray foam",
            MaterialQuantityTwo::Bitumen => "Modified bitumen",
            MaterialQuantityTwo::Bur => "Built-up roofing",
            MaterialQuantityTwo::Tpo => "TPO",
            MaterialQuantityTwo::Epdm => "EPDM",
            MaterialQuantityTwo::Pvc => "PVC",
            MaterialQuantityTwo::Hdpe => "HDPE",
            MaterialQuantityTwo::AsphaltShingle => "Asphalt shingle",
            MaterialQuantityTwo::Cementitious => "Cementitious",
            MaterialQuantityTwo::Intumescent => "Intumescent",
            MaterialQuantityTwo::AlumDoor => "Aluminum door",
            MaterialQuantityTwo::AlumDoorFrame => "Aluminum door frame",
            MaterialQuantityTwo::WoodDoor => "Wood door",
            MaterialQuantityTwo::WoodDoorFrame => "Wood door frame",
            MaterialQuantityTwo::SteelDoor => "Steel door",
            MaterialQuantityTwo::SteelDoorFrame => "Steel door frame",
            MaterialQuantityTwo::AlumFramedGlassEnt => "Aluminum-framed glass entrance",
            MaterialQuantityTwo::FibDoor => "Fiberglass door",
            MaterialQuantityTwo::AlumWindow => "Aluminum window",
            MaterialQuantityTwo::SteelWindow => "Steel window",
            MaterialQuantityTwo::VinylWindow => "Vinyl window",
            MaterialQuantityTwo::WoodWindow => "Wood window",
            MaterialQuantityTwo::FibWindow => "Fiberglass window",
            MaterialQuantityTwo::CwMullion => "Curtain wall mullion",
            MaterialQuantityTwo::AcousCeilFiber => "Acoustic ceiling, fiber",
            MaterialQuantityTwo::AcousCeilAlum => "Acoustic ceiling, aluminum",
            MaterialQuantityTwo::AcousCeilSteel => "Acoustic ceiling, steel",
            MaterialQuantityTwo::SuspSys => "Suspension system",
            MaterialQuantityTwo::Acm => "ACM",
            MaterialQuantityTwo::AlumMetalPanel => "Aluminum metal panel",
            MaterialQuantityTwo::SteelMetalPanel => "Steel metal panel",
            MaterialQuantityTwo::ArchFiberPanel => "Architectural fiber cement panel",
            MaterialQuantityTwo::Imp => "IMP",
            MaterialQuantityTwo::Terracotta => "Terracotta",
            MaterialQuantityTwo::Stucco => "Stucco",
            MaterialQuantityTwo::GfrcPanel => "GFRC panel",
            MaterialQuantityTwo::Hpl => "HPL",
            MaterialQuantityTwo::Paint => "Paint",
            MaterialQuantityTwo::RaisedAcessFloor => "Raised access floor",
            MaterialQuantityTwo::Terrazzo => "Terrazzo",
            MaterialQuantityTwo::Carpet => "Carpet",
            MaterialQuantityTwo::ResFloorVinyl => "Resilient flooring, vinyl",
            MaterialQuantityTwo::ResFloorRubber => "Resilient flooring, rubber",
            MaterialQuantityTwo::PorcelainTile => "Porcelain tile",
            MaterialQuantityTwo::StoneTile => "Stone tile",
            MaterialQuantityTwo::Brass => "Brass",
            MaterialQuantityTwo::Bronze => "Bronze",
            MaterialQuantityTwo::Copper => "Copper",
            MaterialQuantityTwo::Titanium => "Titanium",
            MaterialQuantityTwo::Zinc => "Zinc",
            MaterialQuantityTwo::Fasteners => "Fasteners",
            MaterialQuantityTwo::SynthComp => "Synthetic Composites",
            MaterialQuantityTwo::AdhesSeal => "Adhesives and Sealants",
            MaterialQuantityTwo::AirVapor => "Air and Vapor Barriers",
            MaterialQuantityTwo::WallCoverings => "Wall Coverings",
            MaterialQuantityTwo::ConcreteOther => "Concrete - other",
            MaterialQuantityTwo::SteelOther => "Steel - other",
            MaterialQuantityTwo::MasonryOther => "Masonry - other",
            MaterialQuantityTwo::AlumOther => "Aluminum - other",
            MaterialQuantityTwo::WoodOther => "Wood - other",
            MaterialQuantityTwo::GlazingOther => "Glazing - other",
            MaterialQuantityTwo::InsulationOther => "Insulation - other",
            MaterialQuantityTwo::GypsumOther => "Gypsum - other",
            MaterialQuantityTwo::RoofingOther => "Roofing - other",
            MaterialQuantityTwo::FireproofingOther => "Fireproofing - other",
            MaterialQuantityTwo::DoorOther => "Doors and frames - other",
            MaterialQuantityTwo::WindowOther => "Window frames - other",
            MaterialQuantityTwo::AcousCeilOther => "Acoustic ceilings - other",
            MaterialQuantityTwo::CladdingOther => "Cladding - other",
            MaterialQuantityTwo::CoatingOther => "Coatings - other",
            MaterialQuantityTwo::FloorOther => "Flooring and tile - other",
            MaterialQuantityTwo::OthMetalOther => "Other metals - other",
            MaterialQuantityTwo::Other => "Other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_labels() {
        assert_eq!(Tool::Tally.as_str(), "TallyLCA");
        assert_eq!(Tool::OneClick.as_str(), "One Click LCA");
        assert_eq!(Tool::OneClick.dir_name(), "oneclick");
    }

    #[test]
    fn test_lightweight_ready_mix_values_share_prefix() {
        // The refined element pass picks these out by substring.
        for m in [
            MaterialQuantityTwo::ReadyMixLw3,
            MaterialQuantityTwo::ReadyMixLw4,
            MaterialQuantityTwo::ReadyMixLw5,
        ] {
            assert!(m.as_str().contains("Ready mix LW"));
        }
        assert!(!MaterialQuantityTwo::ReadyMixNw5.as_str().contains("Ready mix LW"));
        assert!(!MaterialQuantityTwo::ReadyMixOther.as_str().contains("Ready mix LW"));
    }

    #[test]
    fn test_sentinels_are_distinct_from_family_buckets() {
        assert_eq!(MaterialQuantityOne::Other.as_str(), "Other");
        assert_eq!(MaterialQuantityTwo::Other.as_str(), "Other");
        assert_ne!(
            MaterialQuantityTwo::ConcreteOther.as_str(),
            MaterialQuantityTwo::Other.as_str()
        );
    }
}
