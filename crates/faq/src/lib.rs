//! Rule-based canned answers for the catalog FAQ panel.
//!
//! Free-form questions are matched against an ordered trigger table; the
//! first rule with any trigger contained in the lowercased input wins.
//! This is a priority list, not a scorer: rule order is part of the
//! contract, since several rules can match the same question.

struct Rule {
    triggers: &'static [&'static str],
    answer: &'static str,
}

// Declaration order is significant. "红箭" must answer before the generic
// "中国" rule even though both triggers may appear in one question.
const RULES: &[Rule] = &[
    Rule {
        triggers: &["红箭", "hj-12"],
        answer: "红箭-12是中国研制的第三代反坦克导弹，采用激光制导，射程4-8公里，具有很强的破甲能力。它可以攻击各种装甲目标，包括坦克、装甲车等。",
    },
    Rule {
        triggers: &["地狱火", "hellfire"],
        answer: "AGM-114地狱火导弹是美国的空地导弹，主要用于攻击装甲目标。它有多种制导方式，包括激光制导和雷达制导，射程约8-11公里。",
    },
    Rule {
        triggers: &["155", "榴弹炮"],
        answer: "155mm榴弹炮是目前北约标准口径，广泛使用的火炮系统。代表性产品包括M777、PLZ-05、PzH 2000等，射程通常在40-70公里之间。",
    },
    Rule {
        triggers: &["中国", "china"],
        answer: "中国的主要军贸产品包括红箭系列反坦克导弹、PLZ-05自行榴弹炮、东风系列导弹等。主要制造商有中国兵器工业集团、中国航天科技集团等。",
    },
    Rule {
        triggers: &["美国", "usa"],
        answer: "美国的军贸产品技术先进，包括地狱火导弹、M777榴弹炮、战斧巡航导弹等。主要制造商有洛克希德·马丁、雷神公司、通用动力等。",
    },
    Rule {
        triggers: &["对比", "比较"],
        answer: "产品对比可以从多个维度进行：射程、精度、制导方式、成本、可靠性等。您可以使用我们的产品对比功能来详细比较不同产品的技术参数。",
    },
];

const FALLBACK: &str =
    "感谢您的问题！我正在学习更多的军贸产品知识。您可以询问关于具体武器系统、技术参数、国家产品等方面的问题，我会尽力为您解答。";

/// Prompt suggestions shown next to the FAQ input.
pub const QUICK_QUESTIONS: &[&str] = &[
    "红箭-12导弹的技术参数是什么？",
    "155mm榴弹炮有哪些代表性产品？",
    "中美军贸产品有什么区别？",
    "如何选择合适的反坦克导弹？",
];

/// Answer a free-form question from the canned rule table.
///
/// Never empty: unmatched input gets the fallback paragraph.
#[must_use]
pub fn respond(user_text: &str) -> &'static str {
    let normalized = user_text.to_lowercase();
    for (index, rule) in RULES.iter().enumerate() {
        if rule
            .triggers
            .iter()
            .any(|trigger| normalized.contains(trigger))
        {
            log::debug!("faq: rule {index} fired for input");
            return rule.answer;
        }
    }
    log::debug!("faq: no rule matched, falling back");
    FALLBACK
}
