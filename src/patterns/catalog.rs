// src/patterns/catalog.rs
use super::{single_candle, three_candle, two_candle};
use crate::types::{CandleData, Direction, PatternMatch};

/// Every formation the classifier knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Hammer,
    InvertedHammer,
    BullishEngulfing,
    BearishEngulfing,
    MorningStar,
    EveningStar,
    PiercingPattern,
    DarkCloudCover,
    BullishHarami,
    BearishHarami,
    TweezerBottom,
    TweezerTop,
    ThreeInsideUp,
    ThreeInsideDown,
    ThreeOutsideUp,
    ThreeOutsideDown,
    OnNeck,
    BullishCounterattack,
    BearishCounterattack,
    WhiteMarubozu,
    BlackMarubozu,
    Doji,
    SpinningTop,
    ThreeWhiteSoldiers,
    ThreeBlackCrows,
}

/// Evaluation order of the default classifier. The first match wins.
pub const DEFAULT_PRECEDENCE: [PatternKind; 25] = [
    PatternKind::Hammer,
    PatternKind::InvertedHammer,
    PatternKind::BullishEngulfing,
    PatternKind::BearishEngulfing,
    PatternKind::MorningStar,
    PatternKind::EveningStar,
    PatternKind::PiercingPattern,
    PatternKind::DarkCloudCover,
    PatternKind::BullishHarami,
    PatternKind::BearishHarami,
    PatternKind::TweezerBottom,
    PatternKind::TweezerTop,
    PatternKind::ThreeInsideUp,
    PatternKind::ThreeInsideDown,
    PatternKind::ThreeOutsideUp,
    PatternKind::ThreeOutsideDown,
    PatternKind::OnNeck,
    PatternKind::BullishCounterattack,
    PatternKind::BearishCounterattack,
    PatternKind::WhiteMarubozu,
    PatternKind::BlackMarubozu,
    PatternKind::Doji,
    PatternKind::SpinningTop,
    PatternKind::ThreeWhiteSoldiers,
    PatternKind::ThreeBlackCrows,
];

impl PatternKind {
    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Hammer => "Hammer",
            PatternKind::InvertedHammer => "Inverted Hammer",
            PatternKind::BullishEngulfing => "Bullish Engulfing",
            PatternKind::BearishEngulfing => "Bearish Engulfing",
            PatternKind::MorningStar => "Morning Star",
            PatternKind::EveningStar => "Evening Star",
            PatternKind::PiercingPattern => "Piercing Pattern",
            PatternKind::DarkCloudCover => "Dark Cloud Cover",
            PatternKind::BullishHarami => "Bullish Harami",
            PatternKind::BearishHarami => "Bearish Harami",
            PatternKind::TweezerBottom => "Tweezer Bottom",
            PatternKind::TweezerTop => "Tweezer Top",
            PatternKind::ThreeInsideUp => "Three Inside Up",
            PatternKind::ThreeInsideDown => "Three Inside Down",
            PatternKind::ThreeOutsideUp => "Three Outside Up",
            PatternKind::ThreeOutsideDown => "Three Outside Down",
            PatternKind::OnNeck => "On-Neck",
            PatternKind::BullishCounterattack => "Bullish Counterattack",
            PatternKind::BearishCounterattack => "Bearish Counterattack",
            PatternKind::WhiteMarubozu => "White Marubozu",
            PatternKind::BlackMarubozu => "Black Marubozu",
            PatternKind::Doji => "Doji",
            PatternKind::SpinningTop => "Spinning Top",
            PatternKind::ThreeWhiteSoldiers => "Three White Soldiers",
            PatternKind::ThreeBlackCrows => "Three Black Crows",
        }
    }

    pub fn from_name(name: &str) -> Option<PatternKind> {
        DEFAULT_PRECEDENCE
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
    }

    pub fn direction(&self) -> Direction {
        use PatternKind::*;
        match self {
            Hammer | InvertedHammer | BullishEngulfing | MorningStar | PiercingPattern
            | BullishHarami | TweezerBottom | ThreeInsideUp | ThreeOutsideUp
            | BullishCounterattack | WhiteMarubozu | ThreeWhiteSoldiers => Direction::Bullish,
            BearishEngulfing | EveningStar | DarkCloudCover | BearishHarami | TweezerTop
            | ThreeInsideDown | ThreeOutsideDown | OnNeck | BearishCounterattack
            | BlackMarubozu | ThreeBlackCrows => Direction::Bearish,
            Doji | SpinningTop => Direction::Neutral,
        }
    }

    pub fn confidence(&self) -> f64 {
        use PatternKind::*;
        match self {
            ThreeWhiteSoldiers | ThreeBlackCrows => 0.95,
            BullishEngulfing | BearishEngulfing | MorningStar | EveningStar | ThreeInsideUp
            | ThreeInsideDown | ThreeOutsideUp | ThreeOutsideDown => 0.90,
            Hammer | InvertedHammer | PiercingPattern | DarkCloudCover => 0.85,
            BullishHarami | BearishHarami | TweezerBottom | TweezerTop | WhiteMarubozu
            | BlackMarubozu => 0.80,
            OnNeck | BullishCounterattack | BearishCounterattack => 0.75,
            Doji | SpinningTop => 0.60,
        }
    }

    /// Number of trailing candles the predicate reads.
    pub fn span(&self) -> usize {
        use PatternKind::*;
        match self {
            Hammer | InvertedHammer | WhiteMarubozu | BlackMarubozu | Doji | SpinningTop => 1,
            BullishEngulfing | BearishEngulfing | PiercingPattern | DarkCloudCover
            | BullishHarami | BearishHarami | TweezerBottom | TweezerTop | OnNeck
            | BullishCounterattack | BearishCounterattack => 2,
            MorningStar | EveningStar | ThreeInsideUp | ThreeInsideDown | ThreeOutsideUp
            | ThreeOutsideDown | ThreeWhiteSoldiers | ThreeBlackCrows => 3,
        }
    }

    /// Formations that earn the zone strength bonus.
    pub fn is_high_confidence_reversal(&self) -> bool {
        matches!(
            self,
            PatternKind::Hammer | PatternKind::BullishEngulfing | PatternKind::BearishEngulfing
        )
    }

    /// Tests the formation against the trailing `span()` candles of `window`.
    pub fn matches(&self, window: &[CandleData]) -> bool {
        let span = self.span();
        if window.len() < span {
            return false;
        }
        let tail = &window[window.len() - span..];

        use PatternKind::*;
        match (self, tail) {
            (Hammer, [c]) => single_candle::is_hammer(c),
            (InvertedHammer, [c]) => single_candle::is_inverted_hammer(c),
            (WhiteMarubozu, [c]) => single_candle::is_white_marubozu(c),
            (BlackMarubozu, [c]) => single_candle::is_black_marubozu(c),
            (Doji, [c]) => single_candle::is_doji(c),
            (SpinningTop, [c]) => single_candle::is_spinning_top(c),

            (BullishEngulfing, [p, c]) => two_candle::is_bullish_engulfing(p, c),
            (BearishEngulfing, [p, c]) => two_candle::is_bearish_engulfing(p, c),
            (PiercingPattern, [p, c]) => two_candle::is_piercing(p, c),
            (DarkCloudCover, [p, c]) => two_candle::is_dark_cloud_cover(p, c),
            (BullishHarami, [p, c]) => two_candle::is_bullish_harami(p, c),
            (BearishHarami, [p, c]) => two_candle::is_bearish_harami(p, c),
            (TweezerBottom, [p, c]) => two_candle::is_tweezer_bottom(p, c),
            (TweezerTop, [p, c]) => two_candle::is_tweezer_top(p, c),
            (OnNeck, [p, c]) => two_candle::is_on_neck(p, c),
            (BullishCounterattack, [p, c]) => two_candle::is_bullish_counterattack(p, c),
            (BearishCounterattack, [p, c]) => two_candle::is_bearish_counterattack(p, c),

            (MorningStar, [a, b, c]) => three_candle::is_morning_star(a, b, c),
            (EveningStar, [a, b, c]) => three_candle::is_evening_star(a, b, c),
            (ThreeInsideUp, [a, b, c]) => three_candle::is_three_inside_up(a, b, c),
            (ThreeInsideDown, [a, b, c]) => three_candle::is_three_inside_down(a, b, c),
            (ThreeOutsideUp, [a, b, c]) => three_candle::is_three_outside_up(a, b, c),
            (ThreeOutsideDown, [a, b, c]) => three_candle::is_three_outside_down(a, b, c),
            (ThreeWhiteSoldiers, [a, b, c]) => three_candle::is_three_white_soldiers(a, b, c),
            (ThreeBlackCrows, [a, b, c]) => three_candle::is_three_black_crows(a, b, c),

            _ => false,
        }
    }

    pub fn to_match(&self) -> PatternMatch {
        PatternMatch {
            name: self.name(),
            direction: self.direction(),
            confidence: self.confidence(),
        }
    }
}
