//! Printable delivery-term document
//!
//! Renders the full legal text of the "Termo de Entrega de Projeto
//! Executivo" as a standalone HTML page. Layout is deliberately minimal:
//! printing (or converting to PDF) is the job of whatever opens the file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::deadline::format_document;
use crate::error::TermoResult;
use crate::models::{DeliveryTerm, Store};

/// Company line printed above the store name
pub const COMPANY: &str = "ITALÍNEA | FG PLUS - LTDA";

/// How a plan-delivery flag reads on the printed form
pub fn delivered_label(delivered: bool) -> &'static str {
    if delivered {
        "Entregue"
    } else {
        "Não Entregue"
    }
}

/// File name for an exported term
pub fn export_filename(term: &DeliveryTerm) -> String {
    format!("Termo Entrega - {}.html", term.name.trim())
}

/// Render the printable document for a term.
pub fn render_term(term: &DeliveryTerm, store: &Store) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>Termo de Entrega de Projeto Executivo</title>
<style>
  body {{ font-family: sans-serif; margin: 2cm; }}
  .empresa p {{ margin: 0; }}
  .assinatura {{ margin-top: 3cm; text-align: center; }}
  .assinatura__espaco {{ border-top: 1px solid #000; width: 60%; margin: 0 auto; }}
</style>
</head>
<body>
<section class="pdf">
<div class="empresa">
  <h3>{company} ({store_name})</h3>
  <p>CNPJ: {cnpj}</p>
  <p>{address}</p>
</div>
<h1>Termo de Entrega de Projeto Executivo</h1>
<div class="dados">
  <p>Nome: <strong>{name}</strong></p>
  <p>CPF: <strong>{cpf}</strong></p>
  <p>RG: <strong>{rg}</strong></p>
  <p>Contrato: <strong>{contract}</strong></p>
  <p>Data de Entrega: <strong>{delivery}</strong></p>
  <p>Planta Hidráulica: <strong>{hydraulic}</strong></p>
  <p>Planta Elétrica: <strong>{electric}</strong></p>
</div>
<br>
<div class="conteudo">
  <p>
    Eu, {name}, portador do RG {rg} devidamente inscrito (a) no CPF/MF sob o nº {cpf}, declaro estar de acordo com o(s) projeto(s) final(is) do(s) ambiente(s) contratado(s), concordando com o layout ( medidas e disposição ) apresentado(s) para o(s) ambiente(s), conforme o PROJETO FINAL anexo a este documento, bem como declaro ciência para o descrito abaixo:
  </p>
  <ul>
    <li>PLANTAS (HIDRÁULICA/ELÉTRICA): Caso não seja possível a entrega das plantas hidráulicas e elétricas até esta data, o cliente se compromete a disponibilizar para o montador, na ocasião da montagem. Caso contrário, assumirá os riscos e eventuais custos provenientes da danificação de canos e tubulações.</li>
    <li>PASTILHAS E PAPEL DE PAREDE: Deverá ser colocado após montagem dos móveis.</li>
    <li>PINTURA NO AMBIENTE: Poderá haver necessidade de uma última mão nas paredes após término da montagem.</li>
    <li>AJUSTES DE MARCENARIA: Poderá haver serviços de marcenaria no local. Como redução de profundidade, ajuste de prateleiras etc.</li>
    <li>GARANTIA: Conforme descrita no contrato de compra e venda.</li>
    <li>RODAPÉ: O rodapé na área de montagem deverá ser retirado pelo cliente antes da instalação dos móveis, ou colocado após a montagem, caso contrário, a montagem será desenvolvida com adaptações.</li>
    <li>MOLDURA DE GESSO: Deve ser retirada pelo cliente antes da instalação dos móveis as molduras de gesso (caso impeça que o móvel fique rente a parede ou fechamento/tamponamento rente ao teto), caso contrário, a montagem será desenvolvida com adaptações.</li>
    <li>TOMADAS/ELETRICA: Os montadores não estão autorizados a fazer modificações elétricas. As tomadas que ficarem atrás dos móveis serão transferidas para o fundo ou lateral do móvel. Caso seja necessário deslocar alguma tomada através dos móveis o cliente deverá levar um profissional para fazer as modificações no dia da montagem. As referencias de spot e fita de LED no projeto, não estão inclusas, somente há orientação para o montador instalar desde que estes estejam no local no ato da montagem.</li>
    <li>GRANITO: Caso o mesmo não esteja instalado no ato da medição, deverá solicitar a fabricação da pia somente após finalização da montagem dos móveis. Cliente ciente que deverá fazer o rodapé de granito após a montagem para ocultar os pés de plástico caso necessários para sustentação de balcões.</li>
    <li>AMBIENTE EM REFORMA: Caso a medição ocorra com o imóvel em obras, qualquer diferença de medidas, será de responsabilidade do cliente, inclusive forro de gesso.</li>
    <li>IRREGULARIDADES NA ALVENARIA: A empresa não se responsabiliza por quaisquer irregularidades nas paredes, pisos, colunas, gesso ou teto. Ficando ciente que somente no ato da montagem poderá ser detectado esse tipo de eventualidade. Os móveis não se adequarão a esse tipo de defeito.</li>
    <li>ELETROS: Os eletrodomésticos, forno e micro ondas deverão estar no local no ato da montagem para que o montador possa fazer os acabamentos necessários. Caso estes não estejam, o retorno do montador para instalar, será cobrado do cliente uma taxa de visita extra.</li>
    <li>PAREDES DE DRY WALL: Conforme contrato o cliente deverá fornecer as buchas de drywall (TOGLER BOLTS) para ambientes com esta necessidade.</li>
  </ul>
  <div class="assinatura">
    <div class="assinatura__espaco"></div>
    <p>{name}</p>
  </div>
</div>
</section>
</body>
</html>
"#,
        company = COMPANY,
        store_name = store.name,
        cnpj = store.cnpj,
        address = store.address,
        name = term.name.trim(),
        cpf = term.cpf,
        rg = term.rg,
        contract = term.contract,
        delivery = format_document(term.delivery),
        hydraulic = delivered_label(term.hydraulic_plan),
        electric = delivered_label(term.electric_plan),
    )
}

/// Write the rendered document to `dir`, returning the path written.
pub fn write_document(dir: &Path, term: &DeliveryTerm, store: &Store) -> TermoResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(term));
    fs::write(&path, render_term(term, store))?;
    Ok(path)
}
