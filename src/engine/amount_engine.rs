//! The operation dispatcher.

use crate::config::{AmountRequest, AssetTable, FormatOptions, ToBaseOptions, ToParentOptions};
use crate::convert::{self, RenderSettings};
use crate::domain::{AmountInput, AmountOutput};
use crate::error::{AmountError, Result};
use crate::traits::AssetSource;

/// Stateless entry point for every amount conversion.
///
/// `AmountEngine` owns (or borrows) the asset spec table it resolves
/// asset identifiers against. It matches on the [`AmountRequest`] variant,
/// resolves the decimal places, and delegates to the conversion routine
/// of that operation.
///
/// # Thread Safety
///
/// All methods take `&self` and hold no mutable state; an engine can be
/// shared freely across threads whenever its asset source can.
///
/// # Example
///
/// ```rust
/// use unitscale::config::{AmountRequest, AssetTable, ToBaseOptions, ToParentOptions};
/// use unitscale::domain::{AmountOutput, AssetSpec, OutputType, RoundingMode};
/// use unitscale::engine::AmountEngine;
///
/// let mut assets = AssetTable::new();
/// assets.insert("usdc", AssetSpec::new("USDC", "USD Coin", 6));
/// let engine = AmountEngine::new(assets);
///
/// let base = engine
///     .execute(&AmountRequest::to_base(
///         "12.3456789",
///         ToBaseOptions::for_asset("usdc")
///             .rounding(RoundingMode::Round)
///             .output(OutputType::Text),
///     ))
///     .expect("valid amount");
/// assert_eq!(base, AmountOutput::Text("12345679".into()));
///
/// let parent = engine
///     .execute(&AmountRequest::to_parent(12_345_679, ToParentOptions::for_asset("usdc")))
///     .expect("valid amount");
/// assert_eq!(parent.as_text(), Some("12.345679"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AmountEngine<A = AssetTable> {
    assets: A,
}

impl<A: AssetSource> AmountEngine<A> {
    /// Creates an engine resolving asset identifiers against `assets`.
    #[must_use]
    pub const fn new(assets: A) -> Self {
        Self { assets }
    }

    /// Returns the asset source.
    #[must_use]
    pub const fn assets(&self) -> &A {
        &self.assets
    }

    /// Executes one request.
    ///
    /// # Flow
    ///
    /// 1. Resolve and validate the decimal places (explicit count or asset
    ///    lookup). Nothing else happens if this fails.
    /// 2. Match on the request variant.
    /// 3. Delegate to the operation's conversion routine.
    ///
    /// # Errors
    ///
    /// - [`AmountError::InvalidDecimalPlaces`](crate::error::AmountError::InvalidDecimalPlaces)
    ///   if the decimal places cannot be resolved.
    /// - Any error returned by the operation itself.
    pub fn execute(&self, request: &AmountRequest) -> Result<AmountOutput> {
        let result = amount(request, &self.assets);
        if let Err(e) = &result {
            tracing::debug!(
                op = %request.operation(),
                kind = %e.kind(),
                error = %e,
                "amount operation failed"
            );
        }
        result
    }

    /// Converts a parent-unit amount into base units.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn to_base(
        &self,
        value: impl Into<AmountInput>,
        options: ToBaseOptions,
    ) -> Result<AmountOutput> {
        self.execute(&AmountRequest::to_base(value, options))
    }

    /// Renders a base-unit amount in parent units.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn to_parent(
        &self,
        value: impl Into<AmountInput>,
        options: ToParentOptions,
    ) -> Result<AmountOutput> {
        self.execute(&AmountRequest::to_parent(value, options))
    }

    /// Formats a base-unit amount for display.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn format(&self, value: impl Into<AmountInput>, options: FormatOptions) -> Result<String> {
        match self.execute(&AmountRequest::format(value, options))? {
            AmountOutput::Text(text) => Ok(text),
            other => Err(AmountError::Generic(format!(
                "format produced a non-text result: {other:?}"
            ))),
        }
    }
}

/// Executes one request against `assets`.
///
/// This is the single dispatch point shared by every engine method.
///
/// # Errors
///
/// See [`AmountEngine::execute`].
pub fn amount<A: AssetSource + ?Sized>(
    request: &AmountRequest,
    assets: &A,
) -> Result<AmountOutput> {
    let decimals = request.source().resolve(assets)?;
    tracing::debug!(
        op = %request.operation(),
        decimals = decimals.get(),
        "dispatching amount operation"
    );

    match request {
        AmountRequest::ToBase { value, options } => {
            let scaled = convert::to_base(value, decimals, options.rounding_mode())?;
            convert::emit(scaled, options.output_type(), options.unsafe_number_allowed())
        }
        AmountRequest::ToParent { value, options } => {
            options.validate()?;
            convert::to_parent(
                value,
                decimals,
                RenderSettings {
                    output: options.output_type(),
                    fixed: options.fixed_digits(),
                    trim: options.trims(),
                    group: options.groups(),
                    allow_unsafe: options.unsafe_number_allowed(),
                },
            )
        }
        AmountRequest::Format { value, options } => {
            let (min, max) = options.fraction_bounds(decimals)?;
            convert::format(value, decimals, min, max, options.groups()).map(AmountOutput::Text)
        }
    }
}
