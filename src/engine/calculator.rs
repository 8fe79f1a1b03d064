//! The calculator engine.

use crate::builder::{CalculatorConfig, ResultEntry};
use crate::core::{
    Guard, Operator, Phase, State, StateTransition, TransitionLog, UnknownOperator,
};
use crate::engine::error::EngineError;
use crate::engine::input::Key;
use crate::format::NumberFormat;
use chrono::Utc;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

/// Pending left operand and operator.
///
/// The accumulator never holds an operator without an operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Accumulator {
    #[default]
    Empty,
    /// A previous result, waiting for an operator.
    Operand(f64),
    /// A left operand and operator, waiting for the right operand.
    Pending { operand: f64, operator: Operator },
}

impl Accumulator {
    pub fn phase(&self) -> Phase {
        match self {
            Self::Empty => Phase::Empty,
            Self::Operand(_) => Phase::Operand,
            Self::Pending { .. } => Phase::Pending,
        }
    }
}

/// Flags the input guards are evaluated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    /// A number was entered and not yet consumed by an operator.
    pub awaiting_operand: bool,
    /// A result was just produced; the next digit starts over.
    pub chaining_result: bool,
    /// The decimal key is usable.
    pub decimal_armed: bool,
}

#[derive(Debug)]
struct Guards {
    operator: Guard<Snapshot>,
    equal: Guard<Snapshot>,
    decimal: Guard<Snapshot>,
}

impl Default for Guards {
    fn default() -> Self {
        Self {
            operator: Guard::new(|s: &Snapshot| s.awaiting_operand),
            equal: Guard::new(|s: &Snapshot| s.awaiting_operand && s.phase == Phase::Pending),
            decimal: Guard::new(|s: &Snapshot| s.decimal_armed),
        }
    }
}

/// Finite-state accumulator driven by keypad events.
///
/// Every handler returns normally. Sequencing faults reset the engine and
/// leave a sentinel string on the display.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::Operator;
/// use chaincalc::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.on_digit('5');
/// calc.on_operator(Operator::Add);
/// calc.on_digit('3');
/// calc.on_equal();
///
/// assert_eq!(calc.display_value(), "8");
/// assert_eq!(calc.history_trace(), "5+3");
/// ```
#[derive(Debug)]
pub struct Calculator {
    idle_label: String,
    format: NumberFormat,
    result_entry: ResultEntry,
    register: Option<String>,
    accumulator: Accumulator,
    history: String,
    awaiting_operand: bool,
    chaining_result: bool,
    decimal_armed: bool,
    display: String,
    journal: TransitionLog<Phase>,
    guards: Guards,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::from_config(&CalculatorConfig::default())
    }

    /// Create an engine from an already validated configuration.
    pub(crate) fn from_config(config: &CalculatorConfig) -> Self {
        Self {
            idle_label: config.idle_label.clone(),
            format: config.number_format(),
            result_entry: config.result_entry,
            register: None,
            accumulator: Accumulator::Empty,
            history: String::new(),
            awaiting_operand: false,
            chaining_result: false,
            decimal_armed: true,
            display: "0".to_string(),
            journal: TransitionLog::with_capacity(config.journal_capacity),
            guards: Guards::default(),
        }
    }

    /// Dispatch a key press to its handler.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(digit) => self.on_digit(digit),
            Key::Operator(op) => self.on_operator(op),
            Key::Decimal => self.on_decimal(),
            Key::Equal => self.on_equal(),
            Key::Clear => self.reset(),
        }
    }

    /// Parse and dispatch a key token. Unknown tokens are ignored.
    pub fn press_str(&mut self, token: &str) {
        match token.parse::<Key>() {
            Ok(key) => self.press(key),
            Err(err) => warn!("ignoring key press: {err}"),
        }
    }

    /// Append a digit to the entry in progress.
    ///
    /// Right after a result the press starts the calculator over instead;
    /// under [`ResultEntry::Reset`] the digit itself is swallowed.
    pub fn on_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            warn!("ignoring non-digit key {digit:?}");
            return;
        }
        let from = self.phase();

        if self.chaining_result {
            debug!("digit after result; starting over");
            self.clear_state();
            if self.result_entry == ResultEntry::Reset {
                self.record(from, Key::Digit(digit));
                return;
            }
        }

        self.register.get_or_insert_with(String::new).push(digit);
        self.history.push(digit);
        self.awaiting_operand = true;
        self.show_register();
        self.record(from, Key::Digit(digit));
    }

    /// Commit the entry and select the next operator.
    ///
    /// Ignored unless a number was entered since the last operator. With an
    /// operation already pending, it is evaluated first and the result
    /// becomes the new left operand.
    pub fn on_operator(&mut self, op: Operator) {
        if !self.guards.operator.check(&self.snapshot()) {
            trace!("operator {op} ignored: no operand entered");
            return;
        }
        let from = self.phase();

        match self.commit_operator(op) {
            Ok(()) => {
                self.history.push_str(op.symbol());
                self.awaiting_operand = false;
                self.chaining_result = false;
                self.decimal_armed = true;
            }
            Err(err) => self.fault(err),
        }
        self.record(from, Key::Operator(op));
    }

    /// Like [`Calculator::on_operator`], for operator tokens coming straight
    /// from a host. A token that names no operator resets the engine and
    /// shows "Math Error".
    pub fn on_operator_token(&mut self, token: &str) {
        match token.parse::<Operator>() {
            Ok(op) => self.on_operator(op),
            Err(UnknownOperator(token)) => {
                if !self.guards.operator.check(&self.snapshot()) {
                    trace!("operator {token:?} ignored: no operand entered");
                    return;
                }
                let from = self.phase();
                self.fault(EngineError::UnknownOperator(token.clone()));
                self.record(from, token);
            }
        }
    }

    /// Evaluate the pending operation.
    ///
    /// Only acts when an operator is pending and a right operand was entered.
    /// The result stays in the accumulator so the next operator chains on it.
    pub fn on_equal(&mut self) {
        if !self.guards.equal.check(&self.snapshot()) {
            trace!("equal ignored: nothing to evaluate");
            return;
        }
        let from = self.phase();

        if let Accumulator::Pending { operand, operator } = self.accumulator {
            match self.take_operand() {
                Ok(rhs) => {
                    let result = operator.evaluate(operand, rhs);
                    self.chaining_result = true;
                    self.decimal_armed = true;
                    self.display = self.format.format(result);
                    self.set_accumulator(Accumulator::Operand(result));
                }
                Err(err) => self.fault(err),
            }
        }
        self.record(from, Key::Equal);
    }

    /// Insert a decimal point, or `0.` when no entry is in progress.
    ///
    /// The key disarms itself until the next operator, equal or reset.
    pub fn on_decimal(&mut self) {
        if !self.guards.decimal.check(&self.snapshot()) {
            trace!("decimal ignored: already used");
            return;
        }
        let from = self.phase();
        self.decimal_armed = false;

        if self.chaining_result {
            debug!("decimal after result; starting over");
            self.clear_state();
            if self.result_entry == ResultEntry::Reset {
                self.record(from, Key::Decimal);
                return;
            }
            self.decimal_armed = false;
        }

        match self.register.as_mut() {
            Some(register) => {
                register.push('.');
                self.history.push('.');
            }
            None => {
                self.register = Some("0.".to_string());
                self.history.push_str("0.");
            }
        }
        self.show_register();
        self.record(from, Key::Decimal);
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        let from = self.phase();
        if let Some(span) = self.journal.duration() {
            debug!("clearing after {span:?} of journaled input");
        }
        self.clear_state();
        self.record(from, Key::Clear);
    }

    pub fn display_value(&self) -> &str {
        &self.display
    }

    /// Every committed token since the last reset, or the idle label.
    pub fn history_trace(&self) -> &str {
        if self.history.is_empty() {
            &self.idle_label
        } else {
            &self.history
        }
    }

    /// Whether nothing is entered or pending.
    pub fn is_idle(&self) -> bool {
        self.phase().is_initial() && self.register.is_none()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase(),
            awaiting_operand: self.awaiting_operand,
            chaining_result: self.chaining_result,
            decimal_armed: self.decimal_armed,
        }
    }

    pub fn phase(&self) -> Phase {
        self.accumulator.phase()
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    /// The entry being typed, exactly as typed.
    pub fn register(&self) -> Option<&str> {
        self.register.as_deref()
    }

    pub fn journal(&self) -> &TransitionLog<Phase> {
        &self.journal
    }

    fn commit_operator(&mut self, op: Operator) -> Result<(), EngineError> {
        let next = match self.accumulator {
            Accumulator::Empty => Accumulator::Pending {
                operand: self.take_operand()?,
                operator: op,
            },
            Accumulator::Operand(operand) => {
                self.register = None;
                Accumulator::Pending {
                    operand,
                    operator: op,
                }
            }
            Accumulator::Pending { operand, operator } => {
                let result = operator.evaluate(operand, self.take_operand()?);
                self.display = self.format.format(result);
                Accumulator::Pending {
                    operand: result,
                    operator: op,
                }
            }
        };
        self.set_accumulator(next);
        Ok(())
    }

    fn take_operand(&mut self) -> Result<f64, EngineError> {
        let phase = self.phase();
        let register = self
            .register
            .take()
            .ok_or(EngineError::MissingOperand { phase })?;
        register
            .parse::<f64>()
            .map_err(|_| EngineError::InvalidOperand(register))
    }

    fn set_accumulator(&mut self, accumulator: Accumulator) {
        debug!("accumulator: {accumulator:?}");
        self.accumulator = accumulator;
    }

    fn show_register(&mut self) {
        if let Some(register) = &self.register {
            self.display.clone_from(register);
        }
    }

    fn fault(&mut self, err: EngineError) {
        warn!("{err}; resetting calculator");
        self.clear_state();
        self.display = err.sentinel().to_string();
    }

    fn clear_state(&mut self) {
        self.register = None;
        self.accumulator = Accumulator::Empty;
        self.history.clear();
        self.awaiting_operand = false;
        self.chaining_result = false;
        self.decimal_armed = true;
        self.display = "0".to_string();
        debug_assert!(self.is_idle());
    }

    fn record(&mut self, from: Phase, input: impl ToString) {
        self.journal.record(StateTransition {
            from,
            to: self.phase(),
            input: input.to_string(),
            timestamp: Utc::now(),
        });
    }
}
