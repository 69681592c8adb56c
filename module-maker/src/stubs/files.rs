//! Built-in stub contents

/// Eloquent model
pub const MODEL_STUB: &str = r"<?php

namespace DummyNamespace;

use Illuminate\Database\Eloquent\Factories\HasFactory;
use Illuminate\Database\Eloquent\Model;

class DummyClass extends Model
{
    use HasFactory;

    protected $table = 'DummyTable';

    protected $guarded = ['id'];
}
";

/// Resource controller bound to a model (shared by web and API controllers)
pub const CONTROLLER_STUB: &str = r"<?php

namespace DummyNamespace;

use DummyFullModelClass;
use DummyRootNamespaceHttp\Controllers\Controller;
use Illuminate\Http\Request;

class DummyClass extends Controller
{
    /**
     * Display a listing of the resource.
     */
    public function index()
    {
        return DummyModelClass::query()->paginate();
    }

    /**
     * Store a newly created resource in storage.
     */
    public function store(Request $request)
    {
        return DummyModelClass::create($request->all());
    }

    /**
     * Display the specified resource.
     */
    public function show(DummyModelClass $DummyModelVariable)
    {
        return $DummyModelVariable;
    }

    /**
     * Update the specified resource in storage.
     */
    public function update(Request $request, DummyModelClass $DummyModelVariable)
    {
        $DummyModelVariable->update($request->all());

        return $DummyModelVariable;
    }

    /**
     * Remove the specified resource from storage.
     */
    public function destroy(DummyModelClass $DummyModelVariable)
    {
        $DummyModelVariable->delete();

        return response()->noContent();
    }
}
";

/// Browser-facing route group
pub const ROUTES_WEB_STUB: &str = r"<?php

use Illuminate\Support\Facades\Route;

Route::group(['prefix' => 'DummyRoutePrefix', 'middleware' => ['web']], function () {
    Route::get('/', 'DummyClass@index')->name('DummyRoutePrefix.index');
    Route::get('/create', 'DummyClass@create')->name('DummyRoutePrefix.create');
    Route::post('/', 'DummyClass@store')->name('DummyRoutePrefix.store');
    Route::get('/{DummyModelVariable}', 'DummyClass@show')->name('DummyRoutePrefix.show');
    Route::get('/{DummyModelVariable}/edit', 'DummyClass@edit')->name('DummyRoutePrefix.edit');
    Route::put('/{DummyModelVariable}', 'DummyClass@update')->name('DummyRoutePrefix.update');
    Route::delete('/{DummyModelVariable}', 'DummyClass@destroy')->name('DummyRoutePrefix.destroy');
});
";

/// JSON API route group
pub const ROUTES_API_STUB: &str = r"<?php

use Illuminate\Support\Facades\Route;

Route::group(['prefix' => 'DummyRoutePrefix', 'middleware' => []], function () {
    Route::get('/', 'DummyClass@index')->name('api.DummyRoutePrefix.index');
    Route::post('/', 'DummyClass@store')->name('api.DummyRoutePrefix.store');
    Route::get('/{DummyModelVariable}', 'DummyClass@show')->name('api.DummyRoutePrefix.read');
    Route::put('/{DummyModelVariable}', 'DummyClass@update')->name('api.DummyRoutePrefix.update');
    Route::delete('/{DummyModelVariable}', 'DummyClass@destroy')->name('api.DummyRoutePrefix.delete');
});
";

/// Create-table migration
pub const MIGRATION_CREATE_STUB: &str = r"<?php

use Illuminate\Database\Migrations\Migration;
use Illuminate\Database\Schema\Blueprint;
use Illuminate\Support\Facades\Schema;

return new class extends Migration
{
    /**
     * Run the migrations.
     */
    public function up(): void
    {
        Schema::create('DummyTable', function (Blueprint $table) {
            $table->id();
            $table->timestamps();
        });
    }

    /**
     * Reverse the migrations.
     */
    public function down(): void
    {
        Schema::dropIfExists('DummyTable');
    }
};
";

/// Blade view (one per create/edit/index/show)
pub const VIEW_STUB: &str = r"@extends('layouts.app')

@section('content')
    <div class='container'>
        <h1>DummyClass: DummyView</h1>
    </div>
@endsection
";

/// Vue single-file component
pub const VUE_COMPONENT_STUB: &str = r"<template>
    <div class='DummyRoutePrefix'>
        <h1>DummyClass</h1>
    </div>
</template>

<script>
export default {
    name: 'DummyClass',

    data() {
        return {};
    },
};
</script>
";
