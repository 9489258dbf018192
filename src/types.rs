use std::fmt;

use serde::Serialize;

/// Services listed in the side menu. Declaration order is render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKey {
    AtualizacaoAutomatica,
    BuscarLocalizacao,
    InserirLocalizacao,
}

impl ServiceKey {
    pub const ALL: [ServiceKey; 3] = [
        ServiceKey::AtualizacaoAutomatica,
        ServiceKey::BuscarLocalizacao,
        ServiceKey::InserirLocalizacao,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceKey::AtualizacaoAutomatica => "atualizacao-automatica",
            ServiceKey::BuscarLocalizacao => "buscar-localizacao",
            ServiceKey::InserirLocalizacao => "inserir-localizacao",
        }
    }

    /// Static descriptor for this service
    pub fn item(self) -> &'static MenuItem {
        match self {
            ServiceKey::AtualizacaoAutomatica => &SERVICE_ITEMS[0],
            ServiceKey::BuscarLocalizacao => &SERVICE_ITEMS[1],
            ServiceKey::InserirLocalizacao => &SERVICE_ITEMS[2],
        }
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
}

pub static SERVICE_ITEMS: [MenuItem; 3] = [
    MenuItem {
        id: "1",
        label: "Atualização Automática",
        icon: None,
    },
    MenuItem {
        id: "2",
        label: "Buscar Localização",
        icon: None,
    },
    MenuItem {
        id: "3",
        label: "Inserir Localização",
        icon: None,
    },
];

// Top navigation buttons. Not wired to any view yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavTarget {
    Services,
    Settings,
}

impl NavTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            NavTarget::Services => "services",
            NavTarget::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavTarget::Services => "Serviços",
            NavTarget::Settings => "Configurações",
        }
    }
}
