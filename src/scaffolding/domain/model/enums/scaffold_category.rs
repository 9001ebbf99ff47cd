use std::str::FromStr;

use super::scaffolding_domain_error::ScaffoldingDomainError;

/// Target project a generated table belongs to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ScaffoldCategory {
    #[default]
    Catalogo,
    Bancos,
    Compras,
    Comunicacion,
    Contabilidad,
    ControlBusiness,
    Credito,
    CuentasXCobrar,
    CuentasXPagar,
    DeduccionAutomatica,
    Facturacion,
    FacturaElectronica,
    Historico,
    Imagenes,
    Interfaces,
    Inventario,
    PreVentas,
    Report,
    Sap,
    Seguridad,
    ServicioImportacion,
    Sincronizacion,
}

impl ScaffoldCategory {
    pub const ALL: [ScaffoldCategory; 22] = [
        Self::Catalogo,
        Self::Bancos,
        Self::Compras,
        Self::Comunicacion,
        Self::Contabilidad,
        Self::ControlBusiness,
        Self::Credito,
        Self::CuentasXCobrar,
        Self::CuentasXPagar,
        Self::DeduccionAutomatica,
        Self::Facturacion,
        Self::FacturaElectronica,
        Self::Historico,
        Self::Imagenes,
        Self::Interfaces,
        Self::Inventario,
        Self::PreVentas,
        Self::Report,
        Self::Sap,
        Self::Seguridad,
        Self::ServicioImportacion,
        Self::Sincronizacion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Catalogo => "Catalogo",
            Self::Bancos => "Bancos",
            Self::Compras => "Compras",
            Self::Comunicacion => "Comunicacion",
            Self::Contabilidad => "Contabilidad",
            Self::ControlBusiness => "ControlBusiness",
            Self::Credito => "Credito",
            Self::CuentasXCobrar => "CuentasXCobrar",
            Self::CuentasXPagar => "CuentasXPagar",
            Self::DeduccionAutomatica => "DeduccionAutomatica",
            Self::Facturacion => "Facturacion",
            Self::FacturaElectronica => "FacturaElectronica",
            Self::Historico => "Historico",
            Self::Imagenes => "Imagenes",
            Self::Interfaces => "Interfaces",
            Self::Inventario => "Inventario",
            Self::PreVentas => "PreVentas",
            Self::Report => "Report",
            Self::Sap => "SAP",
            Self::Seguridad => "Seguridad",
            Self::ServicioImportacion => "ServicioImportacion",
            Self::Sincronizacion => "Sincronizacion",
        }
    }
}

impl FromStr for ScaffoldCategory {
    type Err = ScaffoldingDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == trimmed)
            .ok_or_else(|| ScaffoldingDomainError::InvalidCategory(trimmed.to_string()))
    }
}
