//! 抽出結果の端末表示

use nota_fiscal_common::ExtractedData;

/// よく使うフィールド（JSON Pointer, 表示名）
const HIGHLIGHT_FIELDS: &[(&str, &str)] = &[
    ("/numero_nota_fiscal", "Nota fiscal"),
    ("/data_emissao", "Emissão"),
    ("/valor_total", "Valor total"),
    ("/fornecedor/razao_social", "Fornecedor"),
    ("/faturado/nome_completo", "Faturado"),
    ("/classificacao_despesa", "Classificação"),
];

/// 抽出結果から既知のフィールドを拾って「表示名: 値」の行にする
///
/// 見つからないフィールドは出さない。データ自体は変更しない。
pub fn highlights(data: &ExtractedData) -> Vec<String> {
    HIGHLIGHT_FIELDS
        .iter()
        .filter_map(|(pointer, label)| {
            data.lookup(pointer).map(|value| format!("{}: {}", label, value))
        })
        .collect()
}
