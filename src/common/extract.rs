// src/common/extract.rs

use axum::extract::{FromRequest, FromRequestParts};

use crate::common::error::AppError;

// ---
// Extratores que devolvem rejeições dentro do envelope JSON
// ---
// O `Json` e o `Path` do axum respondem com texto puro quando a conversão
// falha; estes repassam a rejeição para o AppError.

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
