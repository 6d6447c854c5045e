//! Static city and cell configuration.
//!
//! Cities, their 3x3 main grids, the food sub-grids, and the winning line
//! definitions are compile-time data. Nothing here is mutated at runtime;
//! the reducer only ever touches [`crate::state::BingoState`].

/// One grid square: a place to visit or a food item to capture on photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellConfig {
    /// Unique within a grid, stable across sessions. Used as the state key.
    pub id: &'static str,
    pub label: &'static str,
    pub sub: &'static str,
    pub icon: &'static str,
    /// CSS gradient painted behind the placeholder face.
    pub grad: &'static str,
    /// Background position of this cell's fragment of the hidden picture.
    pub hidden_pos: &'static str,
    /// Background size for the hidden-picture fragment.
    pub hidden_size: &'static str,
    /// Static reference image shown before the visitor uploads a photo.
    pub image: Option<&'static str>,
    pub description: Option<&'static str>,
    /// Query string for a maps embed.
    pub map_query: Option<&'static str>,
    /// External booking link, when the place sells tickets.
    pub booking_url: Option<&'static str>,
}

impl CellConfig {
    const fn place(
        id: &'static str,
        label: &'static str,
        sub: &'static str,
        icon: &'static str,
        grad: &'static str,
        hidden_pos: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            sub,
            icon,
            grad,
            hidden_pos,
            hidden_size: "300% 300%",
            image: None,
            description: None,
            map_query: None,
            booking_url: None,
        }
    }

    const fn food(
        id: &'static str,
        label: &'static str,
        icon: &'static str,
        grad: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            sub: "",
            icon,
            grad,
            hidden_pos: "",
            hidden_size: "",
            image: None,
            description: Some(description),
            map_query: None,
            booking_url: None,
        }
    }

    const fn with_image(mut self, image: &'static str) -> Self {
        self.image = Some(image);
        self
    }

    const fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    const fn with_map_query(mut self, map_query: &'static str) -> Self {
        self.map_query = Some(map_query);
        self
    }

    const fn with_booking_url(mut self, booking_url: &'static str) -> Self {
        self.booking_url = Some(booking_url);
        self
    }
}

/// A winning line: three main-grid cell ids forming a row, column or
/// diagonal of the conceptual 3x3 grid.
pub type Line = [&'static str; 3];

/// Registry entry for one city.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityConfig {
    pub id: &'static str,
    pub label: &'static str,
    /// The nine main-grid cells in grid order (box 1..=9).
    pub main_cells: &'static [CellConfig],
    /// Main-cell ids that are real places, not food entrances.
    pub place_ids: &'static [&'static str],
    pub food_cells: &'static [CellConfig],
    pub lines: &'static [Line],
}

impl CityConfig {
    /// All ids tracked for main-grid progress: places plus food entrances.
    pub fn tracked_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.place_ids
            .iter()
            .copied()
            .chain(FOOD_ENTRANCE_IDS.iter().copied())
    }

    /// Cell id for a 1-based box number, following main-grid order.
    #[must_use]
    pub fn cell_id_for_box(&self, box_number: u32) -> Option<&'static str> {
        let index = usize::try_from(box_number.checked_sub(1)?).ok()?;
        self.main_cells.get(index).map(|cell| cell.id)
    }
}

/// Main-grid cells that open the food sub-grid. Identical in every city:
/// each deployment ships the same four entrances around the center rows.
pub const FOOD_ENTRANCE_IDS: [&str; 4] = ["food-1", "food-2", "food-3", "food-4"];

/// Winning lines of the food sub-grid, as indices into the food array.
/// Fixed across cities, unlike the per-city main lines.
pub const FOOD_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub const DEFAULT_CITY_ID: &str = "osaka";

const OSAKA_MAIN: [CellConfig; 9] = [
    CellConfig::place(
        "wild",
        "BEST",
        "자유사진",
        "🌸",
        "linear-gradient(135deg,#FFB7C5,#FF85A2)",
        "0% 0%",
    )
    .with_image("/images/cells/wild.png")
    .with_description("자유롭게 오사카의 아무 장소에서 사진을 찍어보세요!")
    .with_map_query("Osaka,Japan"),
    CellConfig::place(
        "umeda",
        "우메다",
        "스카이빌딩",
        "🌃",
        "linear-gradient(135deg,#1a1a2e,#0f3460)",
        "50% 0%",
    )
    .with_image("/images/cells/umeda.png")
    .with_description("우메다 스카이빌딩의 공중정원 전망대에서 오사카 전경을 감상하세요.")
    .with_map_query("Umeda+Sky+Building+Osaka")
    .with_booking_url("https://www.klook.com/activity/5932-umeda-sky-building-osaka/"),
    CellConfig::place(
        "osaka",
        "오사카성",
        "",
        "🏯",
        "linear-gradient(135deg,#f5af19,#f12711)",
        "100% 0%",
    )
    .with_image("/images/cells/osaka.png")
    .with_description("도요토미 히데요시가 세운 오사카의 상징적인 성입니다.")
    .with_map_query("Osaka+Castle")
    .with_booking_url("https://www.klook.com/activity/1441-osaka-castle-osaka/"),
    CellConfig::place(
        "glico",
        "글리코상",
        "도톤보리",
        "🏃",
        "linear-gradient(135deg,#ee0979,#ff6a00)",
        "0% 50%",
    )
    .with_image("/images/cells/glico.png")
    .with_description("도톤보리의 유명한 글리코 러닝맨 간판 앞에서 포즈를 취하세요!")
    .with_map_query("Glico+Man+Sign+Dotonbori"),
    CellConfig::place(
        "food-1",
        "음식 빙고",
        "",
        "🍽️",
        "linear-gradient(135deg,#FEF3C7,#FDE68A)",
        "50% 50%",
    ),
    CellConfig::place(
        "food-2",
        "음식 빙고",
        "",
        "🍜",
        "linear-gradient(135deg,#FEF3C7,#FDE68A)",
        "100% 50%",
    ),
    CellConfig::place(
        "tsuten",
        "츠텐카쿠",
        "",
        "🗼",
        "linear-gradient(135deg,#00b4db,#0083b0)",
        "0% 100%",
    )
    .with_image("/images/cells/tsuten.png")
    .with_description("신세카이의 상징 츠텐카쿠 타워를 방문하세요.")
    .with_map_query("Tsutenkaku+Tower+Osaka")
    .with_booking_url("https://www.klook.com/activity/1444-tsutenkaku-tower-osaka/"),
    CellConfig::place(
        "food-3",
        "음식 빙고",
        "",
        "🍣",
        "linear-gradient(135deg,#FEF3C7,#FDE68A)",
        "50% 100%",
    ),
    CellConfig::place(
        "food-4",
        "음식 빙고",
        "",
        "🥘",
        "linear-gradient(135deg,#FEF3C7,#FDE68A)",
        "100% 100%",
    ),
];

const OSAKA_PLACE_IDS: [&str; 5] = ["wild", "umeda", "osaka", "glico", "tsuten"];

const OSAKA_FOOD: [CellConfig; 9] = [
    CellConfig::food(
        "f-sushi",
        "스시",
        "🍣",
        "linear-gradient(135deg,#ff6b6b,#ee5a24)",
        "신선한 네타의 오사카 스시를 맛보세요.",
    ),
    CellConfig::food(
        "f-takoyaki",
        "타코야키",
        "🐙",
        "linear-gradient(135deg,#c04848,#6a1b1b)",
        "오사카의 소울푸드! 바삭하고 쫄깃한 타코야키.",
    ),
    CellConfig::food(
        "f-ramen",
        "라멘",
        "🍜",
        "linear-gradient(135deg,#f7e98e,#b8860b)",
        "진한 돈코츠 라멘 한 그릇의 행복.",
    ),
    CellConfig::food(
        "f-mochi",
        "딸기모찌",
        "🍓",
        "linear-gradient(135deg,#ff9a9e,#fad0c4)",
        "달콤한 딸기가 쏙 들어간 모찌를 즐기세요.",
    ),
    CellConfig::food(
        "f-wild",
        "가장 맛있었던",
        "🍽️",
        "linear-gradient(135deg,#ffd200,#f7971e)",
        "가장 맛있었던 음식을 자유롭게 올려주세요!",
    ),
    CellConfig::food(
        "f-pancake",
        "케이크",
        "🍰",
        "linear-gradient(135deg,#f5e6ca,#d4a56a)",
        "달콤한 케이크를 맛보세요.",
    ),
    CellConfig::food(
        "f-okonomiyaki",
        "오코노미야끼",
        "🥘",
        "linear-gradient(135deg,#8B6914,#654321)",
        "오사카식 오코노미야끼는 꼭 먹어봐야 합니다!",
    ),
    CellConfig::food(
        "f-gyukatsu",
        "규카츠",
        "🥩",
        "linear-gradient(135deg,#8e2024,#4a0e10)",
        "바삭한 튀김옷에 육즙 가득한 와규 규카츠.",
    ),
    CellConfig::food(
        "f-yakitori",
        "야끼토리",
        "🍢",
        "linear-gradient(135deg,#f7971e,#a84300)",
        "숯불에 구운 정통 야끼토리를 즐기세요.",
    ),
];

// Grid layout:
// [wild]   [umeda]  [osaka]
// [glico]  [food-1] [food-2]
// [tsuten] [food-3] [food-4]
const OSAKA_LINES: [Line; 8] = [
    ["wild", "umeda", "osaka"],
    ["glico", "food-1", "food-2"],
    ["tsuten", "food-3", "food-4"],
    ["wild", "glico", "tsuten"],
    ["umeda", "food-1", "food-3"],
    ["osaka", "food-2", "food-4"],
    ["wild", "food-1", "food-4"],
    ["osaka", "food-1", "tsuten"],
];

const KYOTO_MAIN: [CellConfig; 9] = [
    CellConfig::place(
        "wild",
        "Wild",
        "자유사진",
        "🌸",
        "linear-gradient(135deg,#FFB7C5,#FF85A2)",
        "0% 0%",
    ),
    CellConfig::place(
        "nara",
        "나라 사슴",
        "나라공원",
        "🦌",
        "linear-gradient(135deg,#8B6914,#D4A574)",
        "50% 0%",
    ),
    CellConfig::place(
        "bamboo",
        "대나무숲",
        "아라시야마",
        "🎋",
        "linear-gradient(135deg,#2d5016,#6b8f3c)",
        "100% 0%",
    ),
    CellConfig::place(
        "nishiki",
        "니시키 시장",
        "",
        "🏪",
        "linear-gradient(135deg,#c0392b,#e74c3c)",
        "0% 50%",
    ),
    CellConfig::place(
        "food-1",
        "음식 빙고",
        "",
        "🍽️",
        "linear-gradient(135deg,#FEF3C7,#FDE68A)",
        "50% 50%",
    ),
    CellConfig::place(
        "food-2",
        "음식 빙고",
        "",
        "🍜",
        "linear-gradient(135deg,#FEF3C7,#FDE68A)",
        "100% 50%",
    ),
    CellConfig::place(
        "kiyomizu",
        "기요미즈데라",
        "",
        "⛩️",
        "linear-gradient(135deg,#B91C1C,#FF6B6B)",
        "0% 100%",
    ),
    CellConfig::place(
        "food-3",
        "음식 빙고",
        "",
        "🍣",
        "linear-gradient(135deg,#FEF3C7,#FDE68A)",
        "50% 100%",
    ),
    CellConfig::place(
        "food-4",
        "음식 빙고",
        "",
        "🥘",
        "linear-gradient(135deg,#FEF3C7,#FDE68A)",
        "100% 100%",
    ),
];

const KYOTO_PLACE_IDS: [&str; 5] = ["wild", "nara", "bamboo", "nishiki", "kiyomizu"];

const KYOTO_FOOD: [CellConfig; 9] = [
    CellConfig::food(
        "f-sushi",
        "스시",
        "🍣",
        "linear-gradient(135deg,#ff6b6b,#ee5a24)",
        "신선한 네타의 교토 스시를 맛보세요.",
    ),
    CellConfig::food(
        "f-takoyaki",
        "타코야키",
        "🐙",
        "linear-gradient(135deg,#c04848,#6a1b1b)",
        "바삭하고 쫄깃한 타코야키.",
    ),
    CellConfig::food(
        "f-ramen",
        "라멘",
        "🍜",
        "linear-gradient(135deg,#f7e98e,#b8860b)",
        "진한 돈코츠 라멘 한 그릇의 행복.",
    ),
    CellConfig::food(
        "f-mochi",
        "딸기모찌",
        "🍓",
        "linear-gradient(135deg,#ff9a9e,#fad0c4)",
        "달콤한 딸기가 쏙 들어간 모찌를 즐기세요.",
    ),
    CellConfig::food(
        "f-wild",
        "가장 맛있었던",
        "🍽️",
        "linear-gradient(135deg,#ffd200,#f7971e)",
        "가장 맛있었던 음식을 자유롭게 올려주세요!",
    ),
    CellConfig::food(
        "f-pancake",
        "케이크",
        "🍰",
        "linear-gradient(135deg,#f5e6ca,#d4a56a)",
        "달콤한 케이크를 맛보세요.",
    ),
    CellConfig::food(
        "f-okonomiyaki",
        "오코노미야끼",
        "🥘",
        "linear-gradient(135deg,#8B6914,#654321)",
        "교토식 오코노미야끼는 꼭 먹어봐야 합니다!",
    ),
    CellConfig::food(
        "f-gyukatsu",
        "규카츠",
        "🥩",
        "linear-gradient(135deg,#8e2024,#4a0e10)",
        "바삭한 튀김옷에 육즙 가득한 와규 규카츠.",
    ),
    CellConfig::food(
        "f-yakitori",
        "야끼토리",
        "🍢",
        "linear-gradient(135deg,#f7971e,#a84300)",
        "숯불에 구운 정통 야끼토리를 즐기세요.",
    ),
];

const KYOTO_LINES: [Line; 8] = [
    ["wild", "nara", "bamboo"],
    ["nishiki", "food-1", "food-2"],
    ["kiyomizu", "food-3", "food-4"],
    ["wild", "nishiki", "kiyomizu"],
    ["nara", "food-1", "food-3"],
    ["bamboo", "food-2", "food-4"],
    ["wild", "food-1", "food-4"],
    ["bamboo", "food-1", "kiyomizu"],
];

pub const OSAKA: CityConfig = CityConfig {
    id: "osaka",
    label: "오사카",
    main_cells: &OSAKA_MAIN,
    place_ids: &OSAKA_PLACE_IDS,
    food_cells: &OSAKA_FOOD,
    lines: &OSAKA_LINES,
};

pub const KYOTO: CityConfig = CityConfig {
    id: "kyoto",
    label: "교토",
    main_cells: &KYOTO_MAIN,
    place_ids: &KYOTO_PLACE_IDS,
    food_cells: &KYOTO_FOOD,
    lines: &KYOTO_LINES,
};

pub const CITIES: [&CityConfig; 2] = [&OSAKA, &KYOTO];

/// Look up a city by id. Unknown ids return `None`; callers decide whether
/// to fall back to [`DEFAULT_CITY_ID`].
#[must_use]
pub fn city(id: &str) -> Option<&'static CityConfig> {
    CITIES.iter().copied().find(|c| c.id == id)
}

/// The city to use when nothing was selected or the stored id is stale.
#[must_use]
pub fn default_city() -> &'static CityConfig {
    &OSAKA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_resolves_known_cities() {
        assert_eq!(city("osaka").map(|c| c.label), Some("오사카"));
        assert_eq!(city("kyoto").map(|c| c.label), Some("교토"));
        assert!(city("tokyo").is_none());
        assert_eq!(default_city().id, DEFAULT_CITY_ID);
    }

    #[test]
    fn every_line_id_exists_in_the_city_grid() {
        for city in CITIES {
            for line in city.lines {
                for id in line {
                    assert!(
                        city.main_cells.iter().any(|cell| cell.id == *id),
                        "{}: line references unknown cell {id}",
                        city.id
                    );
                }
            }
        }
    }

    #[test]
    fn food_entrances_are_part_of_every_main_grid() {
        for city in CITIES {
            for id in FOOD_ENTRANCE_IDS {
                assert!(city.main_cells.iter().any(|cell| cell.id == id));
                assert!(!city.place_ids.contains(&id));
            }
            assert_eq!(city.main_cells.len(), 9);
            assert_eq!(city.food_cells.len(), 9);
            assert_eq!(city.tracked_ids().count(), 9);
        }
    }

    #[test]
    fn box_numbers_follow_grid_order() {
        assert_eq!(OSAKA.cell_id_for_box(1), Some("wild"));
        assert_eq!(OSAKA.cell_id_for_box(5), Some("food-1"));
        assert_eq!(OSAKA.cell_id_for_box(9), Some("food-4"));
        assert_eq!(OSAKA.cell_id_for_box(0), None);
        assert_eq!(OSAKA.cell_id_for_box(10), None);
        assert_eq!(KYOTO.cell_id_for_box(2), Some("nara"));
    }

    #[test]
    fn food_lines_cover_the_fixed_grid() {
        for line in FOOD_LINES {
            for index in line {
                assert!(index < 9);
            }
        }
        assert_eq!(FOOD_LINES.len(), 8);
    }
}
