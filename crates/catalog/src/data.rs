//! Embedded reference datasets.
//!
//! The catalog is read-only: built once at first access, never mutated.
//! Field lists and page sizes are the contract between each dataset and
//! the search facade.

use once_cell::sync::Lazy;

use crate::record::{Ammunition, Artillery, Country};

/// Fields consulted when searching countries.
pub const COUNTRY_FIELDS: &[&str] = &["name", "name_en", "region", "products", "manufacturers"];
/// Fields consulted when searching ammunition.
pub const AMMUNITION_FIELDS: &[&str] =
    &["name", "abbreviation", "caliber", "kind", "manufacturer", "country"];
/// Fields consulted when searching artillery.
pub const ARTILLERY_FIELDS: &[&str] = &["name", "caliber", "kind", "manufacturer", "country"];

pub const COUNTRY_PAGE_SIZE: usize = 20;
pub const AMMUNITION_PAGE_SIZE: usize = 30;
pub const ARTILLERY_PAGE_SIZE: usize = 25;

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

static COUNTRIES: Lazy<Vec<Country>> = Lazy::new(|| {
    vec![
        Country {
            id: 1,
            name: "中国".into(),
            name_en: "China".into(),
            region: "亚洲".into(),
            products: texts(&["红箭-12导弹", "PLZ-05自行榴弹炮", "东风系列导弹"]),
            manufacturers: texts(&["中国兵器工业集团", "中国航天科技集团"]),
        },
        Country {
            id: 2,
            name: "美国".into(),
            name_en: "United States".into(),
            region: "北美洲".into(),
            products: texts(&["地狱火导弹", "M777榴弹炮", "战斧巡航导弹"]),
            manufacturers: texts(&["洛克希德·马丁", "雷神公司", "通用动力"]),
        },
        Country {
            id: 3,
            name: "俄罗斯".into(),
            name_en: "Russia".into(),
            region: "欧洲".into(),
            products: texts(&["伊斯坎德尔导弹", "姆斯塔河榴弹炮", "S-400防空系统"]),
            manufacturers: texts(&["俄罗斯战术导弹公司", "乌拉尔机车厂"]),
        },
        Country {
            id: 4,
            name: "德国".into(),
            name_en: "Germany".into(),
            region: "欧洲".into(),
            products: texts(&["PzH 2000自行榴弹炮", "豹2坦克", "IRIS-T导弹"]),
            manufacturers: texts(&["莱茵金属", "克劳斯-玛菲"]),
        },
        Country {
            id: 5,
            name: "法国".into(),
            name_en: "France".into(),
            region: "欧洲".into(),
            products: texts(&["CAESAR自行榴弹炮", "飞鱼导弹", "MICA导弹"]),
            manufacturers: texts(&["奈克斯特", "MBDA"]),
        },
        Country {
            id: 6,
            name: "英国".into(),
            name_en: "United Kingdom".into(),
            region: "欧洲".into(),
            products: texts(&["挑战者2坦克", "海标枪导弹", "暴风战斗机"]),
            manufacturers: texts(&["BAE系统", "劳斯莱斯"]),
        },
        Country {
            id: 7,
            name: "以色列".into(),
            name_en: "Israel".into(),
            region: "亚洲".into(),
            products: texts(&["铁穹防空系统", "梅卡瓦坦克", "长钉导弹"]),
            manufacturers: texts(&["拉斐尔", "以色列航空工业"]),
        },
        Country {
            id: 8,
            name: "韩国".into(),
            name_en: "South Korea".into(),
            region: "亚洲".into(),
            products: texts(&["K9雷鸣自行榴弹炮", "K2黑豹坦克", "玄武导弹"]),
            manufacturers: texts(&["韩华系统", "现代重工"]),
        },
    ]
});

static AMMUNITION: Lazy<Vec<Ammunition>> = Lazy::new(|| {
    vec![
        Ammunition {
            id: 1,
            name: "红箭-12反坦克导弹".into(),
            abbreviation: "HJ-12".into(),
            caliber: 120.0,
            kind: "反坦克导弹".into(),
            weight: 22.0,
            length: 1200.0,
            min_range: 0.3,
            max_range: 8.0,
            accuracy: 5.0,
            power: "高".into(),
            guidance: "激光制导".into(),
            manufacturer: "中国兵器工业集团".into(),
            country: "中国".into(),
        },
        Ammunition {
            id: 2,
            name: "AGM-114地狱火导弹".into(),
            abbreviation: "Hellfire".into(),
            caliber: 178.0,
            kind: "空对地导弹".into(),
            weight: 45.0,
            length: 1625.0,
            min_range: 0.5,
            max_range: 11.0,
            accuracy: 3.0,
            power: "高".into(),
            guidance: "激光制导".into(),
            manufacturer: "洛克希德·马丁".into(),
            country: "美国".into(),
        },
        Ammunition {
            id: 3,
            name: "AIM-120先进中程空对空导弹".into(),
            abbreviation: "AMRAAM".into(),
            caliber: 178.0,
            kind: "空对空导弹".into(),
            weight: 161.0,
            length: 3650.0,
            min_range: 1.0,
            max_range: 180.0,
            accuracy: 10.0,
            power: "中".into(),
            guidance: "雷达制导".into(),
            manufacturer: "雷神公司".into(),
            country: "美国".into(),
        },
        Ammunition {
            id: 4,
            name: "飞鱼反舰导弹".into(),
            abbreviation: "Exocet".into(),
            caliber: 350.0,
            kind: "反舰导弹".into(),
            weight: 670.0,
            length: 4700.0,
            min_range: 5.0,
            max_range: 180.0,
            accuracy: 15.0,
            power: "极高".into(),
            guidance: "惯性+雷达制导".into(),
            manufacturer: "MBDA".into(),
            country: "法国".into(),
        },
        Ammunition {
            id: 5,
            name: "RPG-7火箭推进榴弹".into(),
            abbreviation: "RPG-7".into(),
            caliber: 85.0,
            kind: "火箭弹".into(),
            weight: 6.3,
            length: 950.0,
            min_range: 0.05,
            max_range: 0.5,
            accuracy: 50.0,
            power: "中".into(),
            guidance: "无制导".into(),
            manufacturer: "俄罗斯战术导弹公司".into(),
            country: "俄罗斯".into(),
        },
        Ammunition {
            id: 6,
            name: "标枪反坦克导弹".into(),
            abbreviation: "Javelin".into(),
            caliber: 127.0,
            kind: "反坦克导弹".into(),
            weight: 22.8,
            length: 1080.0,
            min_range: 0.15,
            max_range: 4.75,
            accuracy: 5.0,
            power: "高".into(),
            guidance: "红外制导".into(),
            manufacturer: "雷神公司".into(),
            country: "美国".into(),
        },
    ]
});

static ARTILLERY: Lazy<Vec<Artillery>> = Lazy::new(|| {
    vec![
        Artillery {
            id: 1,
            name: "PLZ-05自行榴弹炮".into(),
            caliber: 155.0,
            kind: "自行榴弹炮".into(),
            mobility: "履带式".into(),
            muzzle_velocity: 930.0,
            range: 50.0,
            barrel_length: 8.1,
            elevation_range: "-5°~+70°".into(),
            traverse_range: "360°".into(),
            manufacturer: "中国北方工业公司".into(),
            country: "中国".into(),
        },
        Artillery {
            id: 2,
            name: "M777超轻型榴弹炮".into(),
            caliber: 155.0,
            kind: "牵引榴弹炮".into(),
            mobility: "牵引式".into(),
            muzzle_velocity: 827.0,
            range: 40.0,
            barrel_length: 6.4,
            elevation_range: "-5°~+70°".into(),
            traverse_range: "±25°".into(),
            manufacturer: "BAE系统".into(),
            country: "美国".into(),
        },
        Artillery {
            id: 3,
            name: "PzH 2000自行榴弹炮".into(),
            caliber: 155.0,
            kind: "自行榴弹炮".into(),
            mobility: "履带式".into(),
            muzzle_velocity: 940.0,
            range: 56.0,
            barrel_length: 8.1,
            elevation_range: "-2.5°~+65°".into(),
            traverse_range: "360°".into(),
            manufacturer: "克劳斯-玛菲".into(),
            country: "德国".into(),
        },
        Artillery {
            id: 4,
            name: "CAESAR自行榴弹炮".into(),
            caliber: 155.0,
            kind: "自行榴弹炮".into(),
            mobility: "轮式".into(),
            muzzle_velocity: 810.0,
            range: 42.0,
            barrel_length: 6.5,
            elevation_range: "-5°~+66°".into(),
            traverse_range: "±30°".into(),
            manufacturer: "奈克斯特".into(),
            country: "法国".into(),
        },
        Artillery {
            id: 5,
            name: "K9雷鸣自行榴弹炮".into(),
            caliber: 155.0,
            kind: "自行榴弹炮".into(),
            mobility: "履带式".into(),
            muzzle_velocity: 915.0,
            range: 40.0,
            barrel_length: 8.1,
            elevation_range: "-3°~+65°".into(),
            traverse_range: "360°".into(),
            manufacturer: "韩华系统".into(),
            country: "韩国".into(),
        },
        Artillery {
            id: 6,
            name: "2S19姆斯塔河自行榴弹炮".into(),
            caliber: 152.0,
            kind: "自行榴弹炮".into(),
            mobility: "履带式".into(),
            muzzle_velocity: 810.0,
            range: 25.0,
            barrel_length: 6.1,
            elevation_range: "-4°~+68°".into(),
            traverse_range: "360°".into(),
            manufacturer: "乌拉尔机车厂".into(),
            country: "俄罗斯".into(),
        },
        Artillery {
            id: 7,
            name: "M109帕拉丁自行榴弹炮".into(),
            caliber: 155.0,
            kind: "自行榴弹炮".into(),
            mobility: "履带式".into(),
            muzzle_velocity: 684.0,
            range: 30.0,
            barrel_length: 6.1,
            elevation_range: "-3°~+75°".into(),
            traverse_range: "360°".into(),
            manufacturer: "BAE系统".into(),
            country: "美国".into(),
        },
    ]
});

/// Country reference data, supplier countries with flagship products.
#[must_use]
pub fn countries() -> &'static [Country] {
    &COUNTRIES
}

/// Ammunition reference data.
#[must_use]
pub fn ammunition() -> &'static [Ammunition] {
    &AMMUNITION
}

/// Artillery reference data.
#[must_use]
pub fn artillery() -> &'static [Artillery] {
    &ARTILLERY
}
