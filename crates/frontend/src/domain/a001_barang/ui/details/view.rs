use super::state::FieldChange;
use super::view_model::BarangDetailsViewModel;
use crate::shared::components::ui::{
    Alert, Button, FileInput, Input, RadioGroup, Select, Textarea,
};
use crate::shared::config::AppConfig;
use crate::shared::number_format::format_rupiah;
use contracts::domain::a001_barang::aggregate::fields;
use contracts::enums::{Kategori, Kondisi};
use leptos::prelude::*;

#[component]
pub fn BarangDetails(config: AppConfig) -> impl IntoView {
    let vm = BarangDetailsViewModel::new(config);

    let kondisi_options: Vec<(String, String)> = Kondisi::all()
        .into_iter()
        .map(|k| (k.code().to_string(), k.display_name().to_string()))
        .collect();
    let kategori_options: Vec<(String, String)> = Kategori::all()
        .into_iter()
        .map(|k| (k.code().to_string(), k.display_name().to_string()))
        .collect();

    let submitting = Signal::derive(move || vm.is_submitting());

    view! {
        <div class="details-container barang-details">
            <div class="details-header">
                <h1>{"Master Barang"}</h1>
                <p class="details-subtitle">
                    {"Form dengan 6 input: text, textarea, radio, select, dan upload gambar."}
                </p>
            </div>

            {move || vm.state.with(|s| s.error().map(|e| e.to_string())).map(|e| view! {
                <Alert variant="error">{e}</Alert>
            })}
            {move || vm.state.with(|s| s.result().is_some()).then(|| view! {
                <Alert variant="success">{"Berhasil menyimpan barang."}</Alert>
            })}

            <form
                class="details-form details-form--grid"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.submit_command();
                }
            >
                <Input
                    disabled=submitting
                    id="nama"
                    name=fields::NAMA
                    label="Nama Barang"
                    placeholder="Laptop Pro 14"
                    required=true
                    value=Signal::derive(move || vm.state.with(|s| s.nama.clone()))
                    on_input=Callback::new(move |v| vm.set_field(FieldChange::Nama(v)))
                />

                <Input
                    disabled=submitting
                    id="harga"
                    name=fields::HARGA
                    label="Harga"
                    input_type="number"
                    min="0"
                    step="1000"
                    placeholder="15000000"
                    required=true
                    value=Signal::derive(move || vm.state.with(|s| s.harga.clone()))
                    on_input=Callback::new(move |v| vm.set_field(FieldChange::Harga(v)))
                />

                <Textarea
                    disabled=submitting
                    id="deskripsi"
                    name=fields::DESKRIPSI
                    label="Deskripsi"
                    placeholder="Tulis deskripsi..."
                    rows=4
                    required=true
                    value=Signal::derive(move || vm.state.with(|s| s.deskripsi.clone()))
                    on_input=Callback::new(move |v| vm.set_field(FieldChange::Deskripsi(v)))
                />

                <RadioGroup
                    disabled=submitting
                    name=fields::KONDISI
                    label="Kondisi"
                    options=kondisi_options
                    value=Signal::derive(move || vm.state.with(|s| s.kondisi.code().to_string()))
                    on_change=Callback::new(move |code: String| {
                        if let Some(kondisi) = Kondisi::from_code(&code) {
                            vm.set_field(FieldChange::Kondisi(kondisi));
                        }
                    })
                />

                <Select
                    disabled=submitting
                    id="kategori"
                    name=fields::KATEGORI
                    label="Kategori"
                    placeholder="Pilih kategori"
                    required=true
                    options=kategori_options
                    value=Signal::derive(move || {
                        vm.state
                            .with(|s| s.kategori.map(|k| k.code()).unwrap_or_default().to_string())
                    })
                    on_change=Callback::new(move |code: String| {
                        vm.set_field(FieldChange::Kategori(Kategori::from_code(&code)));
                    })
                />

                <FileInput
                    disabled=submitting
                    id="gambar"
                    name=fields::GAMBAR
                    label="Upload Gambar"
                    accept="image/*"
                    required=true
                    on_change=Callback::new(move |file| vm.set_field(FieldChange::Gambar(file)))
                />

                <div class="details-actions">
                    <Button button_type="submit" busy=submitting busy_label="Menyimpan...">
                        {"Simpan"}
                    </Button>
                </div>
            </form>

            <BarangSummary vm=vm />
        </div>
    }
}

/// "Data Terkirim" block, shown after a successful save
#[component]
fn BarangSummary(vm: BarangDetailsViewModel) -> impl IntoView {
    move || {
        let record = vm.state.with(|s| s.result().cloned())?;
        let image_url = vm.result_image_url();

        Some(view! {
            <div class="details-summary">
                <h2>{"Data Terkirim"}</h2>
                <div class="details-summary__body">
                    {image_url.map(|src| view! {
                        <img class="details-summary__image" src=src alt="preview" />
                    })}
                    <ul class="details-summary__list">
                        <li><strong>{"Nama: "}</strong>{record.nama.clone()}</li>
                        <li><strong>{"Harga: "}</strong>{format_rupiah(&record.harga)}</li>
                        <li><strong>{"Kondisi: "}</strong>{record.kondisi.display_name()}</li>
                        <li><strong>{"Kategori: "}</strong>{record.kategori.display_name()}</li>
                        <li><strong>{"Deskripsi: "}</strong>{record.deskripsi.clone()}</li>
                    </ul>
                </div>
            </div>
        })
    }
}
